//! Tour composition mutations
//!
//! All write paths of the core: tour creation, renaming, section
//! re-selection, and deletion. Every operation takes an injected
//! [`WritePolicy`] (checked before any validation, so a read-only
//! deployment surfaces `WritesDisabled` regardless of payload) and a
//! [`RequestContext`] carrying the caller's identity.
//!
//! Mutations are atomic from the caller's view: every validation runs
//! before the first insert, so the store holds either the fully-linked
//! tour or nothing.

use std::collections::HashSet;
use std::time::Instant;

use chrono::Utc;
use museo_core_types::RequestContext;
use uuid::Uuid;

use crate::errors::{MuseoError, Result};
use crate::model::{Tour, TourSection};
use crate::ops::Store;
use crate::policy::WritePolicy;
use crate::queries::tour_queries::{tour_with_details, TourWithDetails};
use crate::{log_op_end, log_op_error, log_op_start};

/// Create a tour for the calling user, scoped to one museum.
///
/// Validation, in order, short-circuiting on the first failure:
/// 1. trimmed name must be non-empty
/// 2. the selection must be non-empty
/// 3. the museum must exist
/// 4. every selected section must belong to that museum
/// 5. the selection must not repeat a section
///
/// The tour id is a UUID v7; display_order is the 0-based position of each
/// section id in the input, preserving the caller's intended order.
///
/// # Errors
/// * `WritesDisabled` - denied by the write policy (read-only deployment)
/// * `InvalidTourName`, `NoSectionsSelected`, `SectionNotInMuseum`,
///   `DuplicateSectionSelection` - validation failures
/// * `MuseumNotFound` - unknown museum id
pub fn create_tour(
    store: &mut Store,
    policy: &dyn WritePolicy,
    ctx: &RequestContext,
    museum_id: &str,
    name: &str,
    section_ids: &[String],
) -> Result<TourWithDetails> {
    let started = Instant::now();
    log_op_start!(
        "create_tour",
        request_id = %ctx.request_id,
        user_id = ctx.user_id(),
        museum_id = museum_id,
        section_count = section_ids.len()
    );

    let result = create_tour_inner(store, policy, ctx, museum_id, name, section_ids);
    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(details) => {
            log_op_end!(
                "create_tour",
                duration_ms = duration_ms,
                tour_id = details.tour.id.as_str()
            );
        }
        Err(err) => log_op_error!("create_tour", err, duration_ms = duration_ms),
    }
    result
}

fn create_tour_inner(
    store: &mut Store,
    policy: &dyn WritePolicy,
    ctx: &RequestContext,
    museum_id: &str,
    name: &str,
    section_ids: &[String],
) -> Result<TourWithDetails> {
    policy.check_write("create_tour")?;

    let name = validated_name(name)?;

    if section_ids.is_empty() {
        return Err(MuseoError::NoSectionsSelected);
    }

    if !store.museum_exists(museum_id) {
        return Err(MuseoError::MuseumNotFound {
            museum_id: museum_id.to_string(),
        });
    }

    validate_section_selection(store, museum_id, section_ids)?;

    // All preconditions hold; build and link in one step
    let tour_id = Uuid::now_v7().to_string();
    let tour = Tour::new(
        tour_id.clone(),
        ctx.user_id().to_string(),
        museum_id.to_string(),
        name,
    );

    let rows: Vec<TourSection> = section_ids
        .iter()
        .enumerate()
        .map(|(position, section_id)| {
            TourSection::new(tour_id.clone(), section_id.clone(), position as u32)
        })
        .collect();

    store.insert_tour(tour.clone());
    store.set_tour_sections(&tour_id, rows);

    tour_with_details(store, &tour)
}

/// Rename a tour. Owner-only.
///
/// # Errors
/// * `WritesDisabled` - denied by the write policy
/// * `TourNotFound` - unknown tour id
/// * `NotTourOwner` - the caller does not own the tour
/// * `InvalidTourName` - empty or whitespace-only name
pub fn update_tour(
    store: &mut Store,
    policy: &dyn WritePolicy,
    ctx: &RequestContext,
    tour_id: &str,
    name: &str,
) -> Result<()> {
    let started = Instant::now();
    log_op_start!(
        "update_tour",
        request_id = %ctx.request_id,
        user_id = ctx.user_id(),
        tour_id = tour_id
    );

    let result = update_tour_inner(store, policy, ctx, tour_id, name);
    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => log_op_end!("update_tour", duration_ms = duration_ms),
        Err(err) => log_op_error!("update_tour", err, duration_ms = duration_ms),
    }
    result
}

fn update_tour_inner(
    store: &mut Store,
    policy: &dyn WritePolicy,
    ctx: &RequestContext,
    tour_id: &str,
    name: &str,
) -> Result<()> {
    policy.check_write("update_tour")?;

    require_owned_tour(store, tour_id, ctx)?;
    let name = validated_name(name)?;

    // Checked above; the second lookup is for the mutable borrow only
    let tour = store
        .get_tour_mut(tour_id)
        .ok_or_else(|| MuseoError::TourNotFound {
            tour_id: tour_id.to_string(),
        })?;
    tour.name = name;
    tour.updated_at = Utc::now();

    Ok(())
}

/// Replace a tour's section selection. Owner-only.
///
/// The new selection is validated exactly like at creation (non-empty,
/// same-museum, no duplicates) and replaces the previous rows atomically;
/// display_order is reassigned from input positions.
///
/// # Errors
/// * `WritesDisabled` - denied by the write policy
/// * `TourNotFound` - unknown tour id
/// * `NotTourOwner` - the caller does not own the tour
/// * `NoSectionsSelected`, `SectionNotInMuseum`, `DuplicateSectionSelection`
///   - validation failures
pub fn update_tour_sections(
    store: &mut Store,
    policy: &dyn WritePolicy,
    ctx: &RequestContext,
    tour_id: &str,
    section_ids: &[String],
) -> Result<()> {
    let started = Instant::now();
    log_op_start!(
        "update_tour_sections",
        request_id = %ctx.request_id,
        user_id = ctx.user_id(),
        tour_id = tour_id,
        section_count = section_ids.len()
    );

    let result = update_tour_sections_inner(store, policy, ctx, tour_id, section_ids);
    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => log_op_end!("update_tour_sections", duration_ms = duration_ms),
        Err(err) => log_op_error!("update_tour_sections", err, duration_ms = duration_ms),
    }
    result
}

fn update_tour_sections_inner(
    store: &mut Store,
    policy: &dyn WritePolicy,
    ctx: &RequestContext,
    tour_id: &str,
    section_ids: &[String],
) -> Result<()> {
    policy.check_write("update_tour_sections")?;

    let museum_id = require_owned_tour(store, tour_id, ctx)?.museum_id.clone();

    if section_ids.is_empty() {
        return Err(MuseoError::NoSectionsSelected);
    }
    validate_section_selection(store, &museum_id, section_ids)?;

    let rows: Vec<TourSection> = section_ids
        .iter()
        .enumerate()
        .map(|(position, section_id)| {
            TourSection::new(tour_id.to_string(), section_id.clone(), position as u32)
        })
        .collect();
    store.set_tour_sections(tour_id, rows);

    if let Some(tour) = store.get_tour_mut(tour_id) {
        tour.updated_at = Utc::now();
    }

    Ok(())
}

/// Delete a tour and all its section rows. Owner-only.
///
/// Deleting an already-deleted id is `TourNotFound`, not a silent success.
///
/// # Errors
/// * `WritesDisabled` - denied by the write policy
/// * `TourNotFound` - unknown tour id
/// * `NotTourOwner` - the caller does not own the tour
pub fn delete_tour(
    store: &mut Store,
    policy: &dyn WritePolicy,
    ctx: &RequestContext,
    tour_id: &str,
) -> Result<()> {
    let started = Instant::now();
    log_op_start!(
        "delete_tour",
        request_id = %ctx.request_id,
        user_id = ctx.user_id(),
        tour_id = tour_id
    );

    let result = delete_tour_inner(store, policy, ctx, tour_id);
    let duration_ms = started.elapsed().as_millis() as u64;
    match &result {
        Ok(()) => log_op_end!("delete_tour", duration_ms = duration_ms),
        Err(err) => log_op_error!("delete_tour", err, duration_ms = duration_ms),
    }
    result
}

fn delete_tour_inner(
    store: &mut Store,
    policy: &dyn WritePolicy,
    ctx: &RequestContext,
    tour_id: &str,
) -> Result<()> {
    policy.check_write("delete_tour")?;

    require_owned_tour(store, tour_id, ctx)?;
    store.remove_tour(tour_id);

    Ok(())
}

/// Resolve a tour and check ownership against the request context.
fn require_owned_tour<'a>(
    store: &'a Store,
    tour_id: &str,
    ctx: &RequestContext,
) -> Result<&'a Tour> {
    let tour = store
        .get_tour(tour_id)
        .ok_or_else(|| MuseoError::TourNotFound {
            tour_id: tour_id.to_string(),
        })?;

    if !tour.is_owned_by(ctx.user_id()) {
        return Err(MuseoError::NotTourOwner {
            tour_id: tour_id.to_string(),
            user_id: ctx.user_id().to_string(),
        });
    }

    Ok(tour)
}

/// Trim and validate a tour name.
fn validated_name(name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(MuseoError::InvalidTourName {
            reason: "Name cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Validate a section selection against a museum: every id must resolve to
/// a section of that museum, and no id may repeat.
fn validate_section_selection(
    store: &Store,
    museum_id: &str,
    section_ids: &[String],
) -> Result<()> {
    for section_id in section_ids {
        match store.get_section(section_id) {
            Some(section) if section.museum_id == museum_id => {}
            // Unknown ids and cross-museum ids are the same caller mistake:
            // the id does not name a section of this museum
            _ => {
                return Err(MuseoError::SectionNotInMuseum {
                    section_id: section_id.clone(),
                    museum_id: museum_id.to_string(),
                });
            }
        }
    }

    let mut seen = HashSet::new();
    for section_id in section_ids {
        if !seen.insert(section_id.as_str()) {
            return Err(MuseoError::DuplicateSectionSelection {
                section_id: section_id.clone(),
            });
        }
    }

    Ok(())
}
