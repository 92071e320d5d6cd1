use crate::utils::error::{CpfError, Result};
use std::net::{IpAddr, SocketAddr};

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn route(&self) -> &str;

    fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self
            .host()
            .parse()
            .map_err(|_| CpfError::InvalidConfigValueError {
                field: "host".to_string(),
                value: self.host().to_string(),
                reason: "Host must be an IPv4 or IPv6 address".to_string(),
            })?;
        Ok(SocketAddr::new(ip, self.port()))
    }
}
