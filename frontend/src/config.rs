pub struct Config {
    pub api_base_url: &'static str,
    pub poll_interval_ms: u32,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            api_base_url: "/api",
            poll_interval_ms: 10_000,
        }
    }
}

pub const CONFIG: Config = Config::new();
