//! Plan service — pass-through CRUD over rooms, doors, and windows.
//!
//! DESIGN
//! ======
//! Every operation is a single statement against Postgres; there is no
//! in-memory state, no transactions beyond one statement, and no optimistic
//! concurrency. Records come back in insertion order (`created_at, id`) so
//! the aggregate payload is stable across fetches.
//!
//! The one enforced invariant is positive room/opening dimensions. Opening
//! `position` values are stored verbatim: an unrecognized side is a
//! placement-time skip, not a storage error.

use sqlx::PgPool;
use uuid::Uuid;

use crate::layout::doc::{FloorPlan, Opening, Room};

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("room not found: {0}")]
    RoomNotFound(Uuid),
    #[error("opening not found: {0}")]
    OpeningNotFound(Uuid),
    #[error("width and height must be positive")]
    InvalidDimensions,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Which opening table an operation targets. Doors and windows share one
/// record shape and differ only in the table they live in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningKind {
    Door,
    Window,
}

impl OpeningKind {
    #[must_use]
    pub fn table(self) -> &'static str {
        match self {
            Self::Door => "doors",
            Self::Window => "windows",
        }
    }
}

/// Sparse update for a room. Only present fields are applied.
#[derive(Debug, Clone, Default)]
pub struct RoomPatch {
    pub name: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

type RoomRow = (Uuid, String, f64, f64, f64, f64);
type OpeningRow = (Uuid, Uuid, String, f64);

fn room_from_row((id, name, width, height, x, y): RoomRow) -> Room {
    Room { id, name, width, height, x, y }
}

fn opening_from_row((id, room_id, position, width): OpeningRow) -> Opening {
    Opening { id, room_id, position, width }
}

// =============================================================================
// AGGREGATE FETCH
// =============================================================================

/// Fetch the whole plan: all rooms, doors, and windows as three ordered
/// sequences. An empty store yields empty sequences, not an error.
///
/// # Errors
///
/// Returns a database error if any query fails.
pub async fn fetch_floor_plan(pool: &PgPool) -> Result<FloorPlan, PlanError> {
    let rooms = list_rooms(pool).await?;
    let doors = list_openings(pool, OpeningKind::Door).await?;
    let windows = list_openings(pool, OpeningKind::Window).await?;
    Ok(FloorPlan { rooms, doors, windows })
}

// =============================================================================
// ROOMS
// =============================================================================

/// List all rooms in insertion order.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_rooms(pool: &PgPool) -> Result<Vec<Room>, PlanError> {
    let rows = sqlx::query_as::<_, RoomRow>(
        "SELECT id, name, width, height, x, y FROM rooms ORDER BY created_at, id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(room_from_row).collect())
}

/// Fetch one room.
///
/// # Errors
///
/// Returns `RoomNotFound` if no row matches.
pub async fn get_room(pool: &PgPool, id: Uuid) -> Result<Room, PlanError> {
    let row = sqlx::query_as::<_, RoomRow>("SELECT id, name, width, height, x, y FROM rooms WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(PlanError::RoomNotFound(id))?;
    Ok(room_from_row(row))
}

/// Create a room with a fresh identity.
///
/// # Errors
///
/// Returns `InvalidDimensions` unless `width > 0 && height > 0`.
pub async fn create_room(
    pool: &PgPool,
    name: &str,
    width: f64,
    height: f64,
    x: f64,
    y: f64,
) -> Result<Room, PlanError> {
    if width <= 0.0 || height <= 0.0 {
        return Err(PlanError::InvalidDimensions);
    }

    let id = Uuid::new_v4();
    sqlx::query("INSERT INTO rooms (id, name, width, height, x, y) VALUES ($1, $2, $3, $4, $5, $6)")
        .bind(id)
        .bind(name)
        .bind(width)
        .bind(height)
        .bind(x)
        .bind(y)
        .execute(pool)
        .await?;

    Ok(Room { id, name: name.to_owned(), width, height, x, y })
}

/// Apply a sparse update to a room and return the updated record.
///
/// # Errors
///
/// Returns `RoomNotFound` if no row matches, `InvalidDimensions` if the
/// patch would make either dimension non-positive.
pub async fn update_room(pool: &PgPool, id: Uuid, patch: RoomPatch) -> Result<Room, PlanError> {
    let mut room = get_room(pool, id).await?;
    if let Some(name) = patch.name {
        room.name = name;
    }
    if let Some(width) = patch.width {
        room.width = width;
    }
    if let Some(height) = patch.height {
        room.height = height;
    }
    if let Some(x) = patch.x {
        room.x = x;
    }
    if let Some(y) = patch.y {
        room.y = y;
    }
    if room.width <= 0.0 || room.height <= 0.0 {
        return Err(PlanError::InvalidDimensions);
    }

    sqlx::query("UPDATE rooms SET name = $2, width = $3, height = $4, x = $5, y = $6 WHERE id = $1")
        .bind(room.id)
        .bind(&room.name)
        .bind(room.width)
        .bind(room.height)
        .bind(room.x)
        .bind(room.y)
        .execute(pool)
        .await?;

    Ok(room)
}

/// Delete a room. Its openings go with it via the schema's cascade.
///
/// # Errors
///
/// Returns `RoomNotFound` if no row matches.
pub async fn delete_room(pool: &PgPool, id: Uuid) -> Result<(), PlanError> {
    let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    if result.rows_affected() == 0 {
        return Err(PlanError::RoomNotFound(id));
    }
    Ok(())
}

// =============================================================================
// OPENINGS
// =============================================================================

/// List all openings of one kind in insertion order.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_openings(pool: &PgPool, kind: OpeningKind) -> Result<Vec<Opening>, PlanError> {
    let query = format!(
        "SELECT id, room_id, position, width FROM {} ORDER BY created_at, id",
        kind.table()
    );
    let rows = sqlx::query_as::<_, OpeningRow>(&query).fetch_all(pool).await?;
    Ok(rows.into_iter().map(opening_from_row).collect())
}

/// Create a door or window attached to an existing room. The `position`
/// value is stored verbatim, unvalidated.
///
/// # Errors
///
/// Returns `RoomNotFound` if the owning room does not exist,
/// `InvalidDimensions` unless `width > 0`.
pub async fn create_opening(
    pool: &PgPool,
    kind: OpeningKind,
    room_id: Uuid,
    position: &str,
    width: f64,
) -> Result<Opening, PlanError> {
    if width <= 0.0 {
        return Err(PlanError::InvalidDimensions);
    }
    get_room(pool, room_id).await?;

    let id = Uuid::new_v4();
    let query = format!(
        "INSERT INTO {} (id, room_id, position, width) VALUES ($1, $2, $3, $4)",
        kind.table()
    );
    sqlx::query(&query)
        .bind(id)
        .bind(room_id)
        .bind(position)
        .bind(width)
        .execute(pool)
        .await?;

    Ok(Opening { id, room_id, position: position.to_owned(), width })
}

/// Delete a door or window.
///
/// # Errors
///
/// Returns `OpeningNotFound` if no row matches.
pub async fn delete_opening(pool: &PgPool, kind: OpeningKind, id: Uuid) -> Result<(), PlanError> {
    let query = format!("DELETE FROM {} WHERE id = $1", kind.table());
    let result = sqlx::query(&query).bind(id).execute(pool).await?;
    if result.rows_affected() == 0 {
        return Err(PlanError::OpeningNotFound(id));
    }
    Ok(())
}

// =============================================================================
// SEEDING
// =============================================================================

/// The built-in demo plan: two rooms, two doors, one window. The Living Room
/// door is authored at `"center"`, which no placement rule recognizes — it
/// exercises the silent-skip path end to end.
#[must_use]
pub fn demo_plan() -> FloorPlan {
    let living = Room {
        id: Uuid::new_v4(),
        name: "Living Room".to_owned(),
        width: 400.0,
        height: 300.0,
        x: 0.0,
        y: 0.0,
    };
    let bedroom = Room {
        id: Uuid::new_v4(),
        name: "Bedroom".to_owned(),
        width: 300.0,
        height: 300.0,
        x: 400.0,
        y: 0.0,
    };

    let doors = vec![
        Opening { id: Uuid::new_v4(), room_id: living.id, position: "center".to_owned(), width: 50.0 },
        Opening { id: Uuid::new_v4(), room_id: bedroom.id, position: "right".to_owned(), width: 50.0 },
    ];
    let windows = vec![Opening {
        id: Uuid::new_v4(),
        room_id: bedroom.id,
        position: "left".to_owned(),
        width: 80.0,
    }];

    FloorPlan { rooms: vec![living, bedroom], doors, windows }
}

/// Seed the demo plan when the store is empty. Returns whether anything was
/// inserted.
///
/// # Errors
///
/// Returns a database error if any insert fails.
pub async fn seed_demo(pool: &PgPool) -> Result<bool, PlanError> {
    let room_count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM rooms")
        .fetch_one(pool)
        .await?;
    if room_count > 0 {
        return Ok(false);
    }

    let plan = demo_plan();
    for room in &plan.rooms {
        sqlx::query("INSERT INTO rooms (id, name, width, height, x, y) VALUES ($1, $2, $3, $4, $5, $6)")
            .bind(room.id)
            .bind(&room.name)
            .bind(room.width)
            .bind(room.height)
            .bind(room.x)
            .bind(room.y)
            .execute(pool)
            .await?;
    }
    for (kind, openings) in [(OpeningKind::Door, &plan.doors), (OpeningKind::Window, &plan.windows)] {
        let query = format!(
            "INSERT INTO {} (id, room_id, position, width) VALUES ($1, $2, $3, $4)",
            kind.table()
        );
        for opening in openings {
            sqlx::query(&query)
                .bind(opening.id)
                .bind(opening.room_id)
                .bind(&opening.position)
                .bind(opening.width)
                .execute(pool)
                .await?;
        }
    }

    Ok(true)
}

#[cfg(test)]
#[path = "plan_test.rs"]
mod tests;
