//! Compiled-in sample data shown by the dashboard.

pub struct DemoCategory {
    pub name: &'static str,
    pub total: f64,
}

pub struct DemoResources {
    /// One value per day, day 1 first.
    pub daily_sales: &'static [f64],
    pub categories: &'static [DemoCategory],
}

pub struct DemoConfig {
    pub resources: DemoResources,
}

pub const DEMO: DemoConfig = DemoConfig {
    resources: DemoResources {
        // 30 days of store sales
        daily_sales: &[
            150.0, 200.0, 250.0, 300.0, 100.0, //
            400.0, 350.0, 300.0, 450.0, 200.0, //
            250.0, 250.0, 300.0, 200.0, 100.0, //
            400.0, 300.0, 350.0, 200.0, 250.0, //
            200.0, 150.0, 400.0, 300.0, 250.0, //
            350.0, 200.0, 150.0, 100.0, 300.0,
        ],
        categories: &[
            DemoCategory { name: "Electronics", total: 500.0 },
            DemoCategory { name: "Clothing", total: 300.0 },
            DemoCategory { name: "Food", total: 400.0 },
            DemoCategory { name: "Pharmacy", total: 200.0 },
        ],
    },
};
