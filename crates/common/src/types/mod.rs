use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Static identification payload served at `/`.
#[derive(Serialize, Debug)]
pub struct ServiceInfo {
    pub message: &'static str,
    pub docs: &'static str,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self { message: "Salon booking API", docs: "/openapi.json" }
    }
}
