use crate::error::Result;
use crate::models::role::RoleName;
use sqlx::PgPool;
use tracing::info;

const INITIAL_UNITS: &[&str] = &[
    "Kilograms (Kg)",
    "Pounds (lbs)",
    "Miles",
    "Kilometers (Km)",
    "Meters (m)",
    "Centimeters (cm)",
    "Inches (in)",
    "Calories",
    "Heart Rate (beats per minute)",
    "Watts (W)",
    "Time (seconds, minutes, hours)",
    "Percentage of 1RM (%1RM)",
    "Body Mass Index (BMI)",
    "Body Fat Percentage (%)",
    "Lean Body Mass (Kg or lbs)",
    "Waist to Hip Ratio",
    "Circumferences (cm or in)",
    "Degrees (°)",
    "VO2 Max (ml/kg/min)",
    "Pace (minutes per km or mile)",
    "Stroke Rate (strokes per minute)",
    "Newton Meters (Nm)",
    "Pound-Feet (lb-ft)",
    "Velocity (m/s)",
    "Work to Rest Ratio",
    "Intervals",
    "Repetitions",
    "Sets",
];

/// Seeds static reference data on first startup. Both seeds are skipped
/// entirely when their table already has rows.
pub async fn seed_initial_data(pool: &PgPool) -> Result<()> {
    seed_roles(pool).await?;
    seed_units(pool).await?;
    Ok(())
}

async fn seed_roles(pool: &PgPool) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM roles")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        info!("Roles already exist, skipping seeding");
        return Ok(());
    }

    for role in RoleName::ALL {
        sqlx::query("INSERT INTO roles (name) VALUES ($1)")
            .bind(role.as_str())
            .execute(pool)
            .await?;
    }
    info!("Roles seeded successfully");
    Ok(())
}

async fn seed_units(pool: &PgPool) -> Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM units")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        info!("Units already exist, skipping seeding");
        return Ok(());
    }

    for unit in INITIAL_UNITS {
        sqlx::query("INSERT INTO units (name) VALUES ($1)")
            .bind(unit)
            .execute(pool)
            .await?;
    }
    info!("Units seeded successfully");
    Ok(())
}
