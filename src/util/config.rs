use crate::core::constant::{
    CHAN_CAPACITY, DEFAULT_SERVER_ADDR, DEFAULT_TEMPLATE_FILE, MESSAGE_BUFFER_SIZE,
    SOCKET_BUFFER_SIZE,
};
use std::{env, str::FromStr};

// ========================// Config //======================== //

/// Configure of the App
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub template_file: String,
    /// Capacity of each participant's outbound queue
    pub message_buffer_size: usize,
    /// Read and write buffer size of the websocket
    pub socket_buffer_size: usize,
    /// Capacity of the room's forward queue
    pub room_channel_capacity: usize,
    /// Whether room lifecycle events are traced
    pub trace: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: DEFAULT_SERVER_ADDR.to_owned(),
            template_file: DEFAULT_TEMPLATE_FILE.to_owned(),
            message_buffer_size: MESSAGE_BUFFER_SIZE,
            socket_buffer_size: SOCKET_BUFFER_SIZE,
            room_channel_capacity: CHAN_CAPACITY,
            trace: true,
        }
    }
}

impl Config {
    /// Initialize the Config from env
    pub fn from_env() -> Config {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Initialize the Config from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let server_addr = lookup("SERVER_ADDR").unwrap_or(defaults.server_addr);
        let template_file = lookup("TEMPLATE_FILE").unwrap_or(defaults.template_file);

        let message_buffer_size = parse_or(
            &lookup,
            "MESSAGE_BUFFER_SIZE",
            defaults.message_buffer_size,
        );
        let socket_buffer_size =
            parse_or(&lookup, "SOCKET_BUFFER_SIZE", defaults.socket_buffer_size);
        let room_channel_capacity = parse_or(
            &lookup,
            "ROOM_CHANNEL_CAPACITY",
            defaults.room_channel_capacity,
        );
        let trace = parse_or(&lookup, "ROOM_TRACE", defaults.trace);

        // tokio channels refuse a zero capacity
        assert!(message_buffer_size > 0, "MESSAGE_BUFFER_SIZE must be positive");
        assert!(
            room_channel_capacity > 0,
            "ROOM_CHANNEL_CAPACITY must be positive"
        );

        Config {
            server_addr,
            template_file,
            message_buffer_size,
            socket_buffer_size,
            room_channel_capacity,
            trace,
        }
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .unwrap_or_else(|_| panic!("failed to parse {}", key)),
        None => default,
    }
}

// ========================// tests //======================== //

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));

        assert_eq!(config.server_addr, "0.0.0.0:8080");
        assert_eq!(config.template_file, "templates/chat.html");
        assert_eq!(config.message_buffer_size, 256);
        assert_eq!(config.socket_buffer_size, 1024);
        assert_eq!(config.room_channel_capacity, 100);
        assert!(config.trace);
    }

    #[test]
    fn overrides_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("SERVER_ADDR", "127.0.0.1:9000"),
            ("MESSAGE_BUFFER_SIZE", "8"),
            ("ROOM_TRACE", "false"),
        ]));

        assert_eq!(config.server_addr, "127.0.0.1:9000");
        assert_eq!(config.message_buffer_size, 8);
        assert!(!config.trace);
    }

    #[test]
    #[should_panic(expected = "failed to parse SOCKET_BUFFER_SIZE")]
    fn malformed_value() {
        Config::from_lookup(lookup_from(&[("SOCKET_BUFFER_SIZE", "lots")]));
    }

    #[test]
    #[should_panic(expected = "MESSAGE_BUFFER_SIZE must be positive")]
    fn zero_capacity() {
        Config::from_lookup(lookup_from(&[("MESSAGE_BUFFER_SIZE", "0")]));
    }
}
