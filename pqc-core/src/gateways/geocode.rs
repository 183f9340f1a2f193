pub trait GeoCodingGateway {
    /// Best effort, `None` if the address could not be resolved.
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<(f64, f64)>;
}
