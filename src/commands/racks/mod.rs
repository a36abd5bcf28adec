//! Rack mutations. Each command loads a snapshot of the other non-deleted
//! racks in the blueprint, runs the pure placement validator against it, and
//! applies the rack plus its generated locations as one transaction.

pub mod create_rack_command;
pub mod delete_rack_command;
pub mod rotate_rack_command;
pub mod update_rack_command;

pub use create_rack_command::{CreateRackCommand, CreateRackResult};
pub use delete_rack_command::DeleteRackCommand;
pub use rotate_rack_command::{RotateRackCommand, RotateRackResult};
pub use update_rack_command::{UpdateRackCommand, UpdateRackResult};

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::entities::{blueprint, location, rack};
use crate::errors::ServiceError;
use crate::geometry::{effective_rect, Bounds, PlacedRack, Rotation};

/// Blueprint bounds, snapping grid (meters) and effective rectangles of all
/// non-deleted racks, loaded at the start of a mutation.
pub(crate) struct PlacementSnapshot {
    pub bounds: Bounds,
    pub grid: Decimal,
    pub racks: Vec<PlacedRack>,
}

pub(crate) async fn load_snapshot<C: ConnectionTrait>(
    conn: &C,
    blueprint_id: Uuid,
) -> Result<PlacementSnapshot, ServiceError> {
    let plan = blueprint::Entity::find_by_id(blueprint_id)
        .filter(blueprint::Column::IsDeleted.eq(false))
        .one(conn)
        .await?
        .ok_or_else(|| ServiceError::not_found("Blueprint", blueprint_id))?;

    let racks = rack::Entity::find()
        .filter(rack::Column::BlueprintId.eq(blueprint_id))
        .filter(rack::Column::IsDeleted.eq(false))
        .all(conn)
        .await?;

    let placed = racks
        .iter()
        .map(|r| {
            Ok(PlacedRack {
                id: r.id,
                rect: effective_rect(
                    r.position_x,
                    r.position_y,
                    r.width,
                    r.height,
                    stored_rotation(r)?,
                ),
            })
        })
        .collect::<Result<Vec<_>, ServiceError>>()?;

    Ok(PlacementSnapshot {
        bounds: Bounds {
            width: plan.width,
            height: plan.height,
        },
        grid: Decimal::from(plan.grid_size) / dec!(100),
        racks: placed,
    })
}

pub(crate) fn stored_rotation(rack: &rack::Model) -> Result<Rotation, ServiceError> {
    Rotation::from_degrees(rack.rotation_degrees).ok_or_else(|| {
        ServiceError::InternalError(format!(
            "rack {} has invalid rotation {}",
            rack.id, rack.rotation_degrees
        ))
    })
}

/// Builds the `rows × grids` location set for a rack. Row/grid indices are
/// 1-based; z coordinate steps half a meter per row.
pub(crate) fn generate_locations(
    rack_id: Uuid,
    rack_name: &str,
    position_x: Decimal,
    position_y: Decimal,
    rows: i32,
    grids: i32,
) -> Vec<location::ActiveModel> {
    let now = Utc::now();
    let mut models = Vec::with_capacity((rows as usize) * (grids as usize));
    for row in 1..=rows {
        for grid in 1..=grids {
            let z = Decimal::from(row - 1) * dec!(0.5);
            models.push(location::ActiveModel {
                id: Set(Uuid::new_v4()),
                rack_id: Set(rack_id),
                row: Set(row),
                grid: Set(grid),
                zone: Set(format!("{rack_name}-Zone")),
                capacity: Set(100),
                x_coordinates: Set(position_x.to_string()),
                y_coordinates: Set(position_y.to_string()),
                z_coordinates: Set(z.to_string()),
                description: Set(format!("Auto-generated location for {rack_name}")),
                is_deleted: Set(false),
                created_date: Set(now),
                updated_date: Set(None),
                deleted_date: Set(None),
            });
        }
    }
    models
}

/// Soft-deletes every non-deleted location of a rack.
pub(crate) async fn soft_delete_locations<C: ConnectionTrait>(
    conn: &C,
    rack_id: Uuid,
) -> Result<(), ServiceError> {
    use sea_orm::sea_query::Expr;

    location::Entity::update_many()
        .col_expr(location::Column::IsDeleted, Expr::value(true))
        .col_expr(location::Column::DeletedDate, Expr::value(Some(Utc::now())))
        .filter(location::Column::RackId.eq(rack_id))
        .filter(location::Column::IsDeleted.eq(false))
        .exec(conn)
        .await?;
    Ok(())
}

pub(crate) fn ensure_positive_size(width: Decimal, height: Decimal) -> Result<(), ServiceError> {
    if width <= Decimal::ZERO || height <= Decimal::ZERO {
        return Err(ServiceError::ValidationError(
            "rack width and height must be positive".into(),
        ));
    }
    Ok(())
}
