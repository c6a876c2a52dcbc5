//! Car API Handlers
//!
//! Creation takes a multipart form so the plate photo rides along with the
//! text fields. Photos are validated (extension, size, a real decode) and
//! stored as discrete files under the uploads directory; the car record only
//! carries the generated filename.

use std::fs;
use std::path::PathBuf;

use axum::{
    Json,
    extract::{Multipart, Path, Query, State},
};
use serde::Deserialize;
use uuid::Uuid;

use crate::AppError;
use crate::auth::CurrentEmployee;
use crate::core::ServerState;
use crate::registry::{CarDetails, transition};
use crate::utils::validation::{MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_required_text};
use crate::utils::{AppResponse, AppResult, ok, ok_with_message};

use shared::client::{PaymentRequest, StatusUpdateRequest};
use shared::{Car, CarStatus};

/// Maximum plate photo size (16 MB)
const MAX_PHOTO_SIZE: usize = 16 * 1024 * 1024;

/// Accepted photo extensions
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif"];

/// Validate a plate photo upload
fn validate_photo(data: &[u8], ext: &str) -> Result<(), AppError> {
    if data.len() > MAX_PHOTO_SIZE {
        return Err(AppError::validation(format!(
            "Photo too large. Maximum size is {} bytes ({}MB)",
            MAX_PHOTO_SIZE,
            MAX_PHOTO_SIZE / 1024 / 1024
        )));
    }

    let ext_lower = ext.to_lowercase();
    if !ALLOWED_EXTENSIONS.contains(&ext_lower.as_str()) {
        return Err(AppError::validation(format!(
            "Unsupported photo format '{}'. Allowed: {}",
            ext_lower,
            ALLOWED_EXTENSIONS.join(", ")
        )));
    }

    // Verify it's actually an image by trying to decode it
    if let Err(e) = image::load_from_memory(data) {
        return Err(AppError::validation(format!(
            "Invalid image file ({}): {}",
            ext_lower, e
        )));
    }

    Ok(())
}

/// Store a validated photo under a collision-resistant filename
fn store_photo(state: &ServerState, data: &[u8], ext: &str) -> Result<String, AppError> {
    let uploads_dir = state.config.uploads_dir();
    fs::create_dir_all(&uploads_dir)
        .map_err(|e| AppError::persistence(format!("Failed to create uploads directory: {}", e)))?;

    let filename = format!("{}.{}", Uuid::new_v4(), ext.to_lowercase());
    fs::write(uploads_dir.join(&filename), data)
        .map_err(|e| AppError::persistence(format!("Failed to save photo: {}", e)))?;
    Ok(filename)
}

/// POST /api/cars - register a car in the washing queue
pub async fn create(
    State(state): State<ServerState>,
    employee: CurrentEmployee,
    mut multipart: Multipart,
) -> AppResult<Json<AppResponse<Car>>> {
    // Role gate first, before any file lands on disk
    transition::check_create(employee.role)?;

    let mut car_name: Option<String> = None;
    let mut plate_number: Option<String> = None;
    let mut photo: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("car_name") => car_name = Some(field.text().await?),
            Some("plate_number") => plate_number = Some(field.text().await?),
            Some("plate_photo") => {
                let filename = field.file_name().map(|s| s.to_string());
                let data = field.bytes().await?;
                // Browsers send an empty part when no file was picked
                if let Some(filename) = filename
                    && !data.is_empty()
                {
                    let ext = PathBuf::from(&filename)
                        .extension()
                        .and_then(|e| e.to_str().map(|s| s.to_string()))
                        .ok_or_else(|| {
                            AppError::validation(format!("Photo has no file extension: {}", filename))
                        })?;
                    photo = Some((ext, data.to_vec()));
                }
            }
            _ => {}
        }
    }

    let car_name = car_name.ok_or_else(|| AppError::validation("car_name is required"))?;
    let plate_number =
        plate_number.ok_or_else(|| AppError::validation("plate_number is required"))?;
    validate_required_text(&car_name, "car_name", MAX_NAME_LEN)?;
    validate_required_text(&plate_number, "plate_number", MAX_SHORT_TEXT_LEN)?;

    let plate_photo = match &photo {
        Some((ext, data)) => {
            validate_photo(data, ext)?;
            Some(store_photo(&state, data, ext)?)
        }
        None => None,
    };

    let car = state.registry.create(
        CarDetails {
            car_name: car_name.trim().to_string(),
            plate_number: plate_number.trim().to_string(),
            plate_photo,
        },
        &employee.info(),
    )?;

    Ok(ok_with_message(
        car,
        "Car added to washing queue",
    ))
}

/// Query params for listing cars
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub status: Option<String>,
}

/// GET /api/cars - list cars, optionally by status
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<AppResponse<Vec<Car>>>> {
    let cars = match query.status {
        Some(raw) => {
            let status: CarStatus = raw
                .parse()
                .map_err(|_| AppError::validation(format!("unknown status filter: {:?}", raw)))?;
            state.registry.list_by_status(status)
        }
        None => state.registry.list_all(),
    };
    Ok(ok(cars))
}

/// GET /api/cars/{id} - single car
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AppResponse<Car>>> {
    let car = state.registry.get(id)?;
    Ok(ok(car))
}

/// POST /api/cars/{id}/status - role-gated status move
///
/// An unknown target status fails like any other illegal move.
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    employee: CurrentEmployee,
    Json(req): Json<StatusUpdateRequest>,
) -> AppResult<Json<AppResponse<Car>>> {
    let target: CarStatus = req.status.parse().map_err(|_| {
        AppError::invalid_transition(format!("unknown target status: {:?}", req.status))
    })?;

    let car = state.registry.update_status(id, target, &employee.info())?;
    Ok(ok(car))
}

/// POST /api/cars/{id}/payment - take payment, finishing the car
pub async fn pay(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    employee: CurrentEmployee,
    Json(req): Json<PaymentRequest>,
) -> AppResult<Json<AppResponse<Car>>> {
    let car = state.registry.pay(id, &req.amount, &employee.info())?;
    Ok(ok_with_message(car, "Payment processed"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes() -> Vec<u8> {
        let mut buf = std::io::Cursor::new(Vec::new());
        image::DynamicImage::new_rgb8(1, 1)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn decodable_photo_with_known_extension_passes() {
        let data = png_bytes();
        assert!(validate_photo(&data, "png").is_ok());
        // Extension check is case-insensitive
        assert!(validate_photo(&data, "PNG").is_ok());
    }

    #[test]
    fn oversized_photo_is_rejected() {
        let data = vec![0u8; MAX_PHOTO_SIZE + 1];
        assert!(matches!(
            validate_photo(&data, "png"),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn disallowed_extension_is_rejected() {
        assert!(matches!(
            validate_photo(&png_bytes(), "bmp"),
            Err(AppError::Validation(_))
        ));
        assert!(validate_photo(&png_bytes(), "exe").is_err());
    }

    #[test]
    fn non_image_payload_with_valid_extension_is_rejected() {
        assert!(matches!(
            validate_photo(b"definitely not pixels", "png"),
            Err(AppError::Validation(_))
        ));
    }
}
