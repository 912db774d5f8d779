use std::ops::RangeInclusive;

pub trait Configuration: Clone + Send + Sync + 'static {
    fn admin_password(&self) -> String;
    fn port(&self) -> u16;
    fn database_url(&self) -> Option<String>;
    /// Hours an admin may mark bookable, both ends inclusive.
    fn working_hours(&self) -> RangeInclusive<u32>;
}
