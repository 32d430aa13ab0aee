//! JSON fallback for unmatched routes.

use salvo::{catcher::Catcher, oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Error message body
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ErrorBody {
    /// Human-readable error message
    pub message: String,
}

/// Renders unmatched routes as `404 {"message": ...}`.
#[handler]
async fn not_found(res: &mut Response, ctrl: &mut FlowCtrl) {
    if res.status_code == Some(StatusCode::NOT_FOUND) {
        res.render(Json(ErrorBody {
            message: "Not Found".to_string(),
        }));
        ctrl.skip_rest();
    }
}

pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(not_found)
}
