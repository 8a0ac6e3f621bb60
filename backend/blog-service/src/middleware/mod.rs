/// Middleware implementations
pub mod jwt_auth;

// Middleware modules:
// - jwt_auth: JWT Bearer token validation and user_id extraction
// - Request logging: handled by tracing_actix_web::TracingLogger
// - CORS: handled by actix_cors::Cors

pub use jwt_auth::{JwtAuthMiddleware, UserId};
