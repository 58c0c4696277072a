pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_TEMPLATE_FILE: &str = "templates/chat.html";

/// Capacity of the forward queue feeding the room
pub const CHAN_CAPACITY: usize = 100;
/// Capacity of each participant's outbound queue
pub const MESSAGE_BUFFER_SIZE: usize = 256;
/// Read and write buffer size of the websocket transport
pub const SOCKET_BUFFER_SIZE: usize = 1024;
