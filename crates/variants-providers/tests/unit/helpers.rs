//! External service detection
//!
//! Usage: call `skip_if_service_unavailable!("Redis", is_redis_available())`
//! at the start of a test to return early when the service is down.

#![allow(dead_code)]

use std::net::TcpStream;
use std::time::Duration;

/// Check if a service is listening on the given host:port
pub fn check_service_available(host: &str, port: u16) -> bool {
    match format!("{host}:{port}").parse() {
        Ok(socket_addr) => {
            TcpStream::connect_timeout(&socket_addr, Duration::from_millis(300)).is_ok()
        }
        Err(_) => false,
    }
}

/// Redis cache service (default port 6379)
pub fn is_redis_available() -> bool {
    check_service_available("127.0.0.1", 6379)
}

/// MongoDB service (default port 27017)
pub fn is_mongodb_available() -> bool {
    check_service_available("127.0.0.1", 27017)
}

/// Return early from a test when the service is unavailable
macro_rules! skip_if_service_unavailable {
    ($name:expr, $available:expr) => {
        if !$available {
            eprintln!("skipping: {} is not available", $name);
            return;
        }
    };
}
