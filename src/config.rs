use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Default bind address: all interfaces.
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Default listen port, matching the sender side of the telemetry link.
pub const DEFAULT_PORT: u16 = 1337;

/// Default receive buffer size in bytes. The sender is expected to keep
/// datagrams under this; longer payloads are truncated by the receive call.
pub const DEFAULT_RECV_BUFFER_LEN: usize = 1024;

/// Where and how the listener receives telemetry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub recv_buffer_len: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            port: DEFAULT_PORT,
            recv_buffer_len: DEFAULT_RECV_BUFFER_LEN,
        }
    }
}

impl ListenerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}
