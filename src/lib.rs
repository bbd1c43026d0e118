// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup
// - infrastructure: DB adapters
// - presentation: HTTP handlers and routing
// - application: error taxonomy, ports, use cases
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
