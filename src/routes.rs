// Route path constants - single source of truth for all API paths

pub const INDEX: &str = "/";
pub const HEALTH: &str = "/health";
pub const METRICS: &str = "/metrics";
pub const LIST: &str = "/list";
pub const SEARCH: &str = "/search";
pub const ADD: &str = "/add";
pub const DELETE: &str = "/delete";

pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI: &str = "/swagger-ui";
