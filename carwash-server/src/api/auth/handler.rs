//! Authentication Handlers
//!
//! Login is name + role self-assertion: no password, no lookup. The value
//! the boundary adds is validation — a blank name or an unknown role never
//! reaches the session store.

use axum::{Json, extract::State};

use crate::AppError;
use crate::auth::CurrentEmployee;
use crate::core::ServerState;
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text};
use crate::utils::{AppResponse, ok, ok_with_message};

use shared::client::{LoginRequest, LoginResponse};
use shared::{EmployeeInfo, Role};

/// Login handler
///
/// Issues an opaque session token for the declared identity.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AppResponse<LoginResponse>>, AppError> {
    validate_required_text(&req.name, "name", MAX_NAME_LEN)?;
    let role: Role = req
        .role
        .parse()
        .map_err(|_| AppError::validation(format!("role must be washer or cashier, got {:?}", req.role)))?;

    let employee = EmployeeInfo::new(req.name.trim(), role);
    let token = state.sessions.login(employee.clone());

    Ok(ok(LoginResponse {
        token: token.to_string(),
        employee,
    }))
}

/// Current employee info
pub async fn me(employee: CurrentEmployee) -> Json<AppResponse<shared::EmployeeInfo>> {
    ok(employee.info())
}

/// Logout handler
pub async fn logout(
    State(state): State<ServerState>,
    employee: CurrentEmployee,
) -> Json<AppResponse<()>> {
    state.sessions.logout(employee.token);
    ok_with_message((), "Logged out")
}
