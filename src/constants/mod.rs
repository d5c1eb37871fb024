pub struct Env {
    pub database_url: String,
    pub ip: String,
    pub port: u16,
    pub page_size: usize,
}

impl Env {
    fn new() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .expect("DATABASE_URL must be set in .env file or environment variable");

        let ip = std::env::var("IP").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .expect("PORT must be a valid u16 integer");
        let page_size = std::env::var("PAGE_SIZE")
            .unwrap_or_else(|_| "50".to_string())
            .parse::<usize>()
            .expect("PAGE_SIZE must be a valid usize integer");

        Env { database_url, ip, port, page_size }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
