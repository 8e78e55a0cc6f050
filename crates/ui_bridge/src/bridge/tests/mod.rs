//! Frame-level tests driving a [`Bridge`](super::Bridge) over the headless host

mod host_services;
