use egress_probe_core::contract::AlertNotification;

pub trait AlertPublisher {
    fn publish(&self, alert: &AlertNotification) -> Result<(), String>;
}
