//! Catalog and Tour Demonstration
//!
//! This example walks the full read-model surface against the demo seed.
#![allow(clippy::unwrap_used, clippy::expect_used)]
//!
//! Key concepts illustrated:
//! 1. Seeding and validating the catalog
//! 2. Deterministic catalog queries (sorted museums, floor-ordered sections)
//! 3. Free-text museum search
//! 4. Tour composition with request-scoped identity
//! 5. Write-policy gating for read-only deployments

use museo_core::ops::tour_ops;
use museo_core::queries::{catalog_queries, tour_queries};
use museo_core::rules::validate_catalog;
use museo_core::{seed, MuseoError, ReadOnlyPolicy, ReadWritePolicy, RequestContext};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Museo Catalog Demo ===\n");

    // ===== Part 1: Seed and Validate =====
    println!("## Part 1: Seeding\n");

    let mut store = seed::demo_catalog();
    validate_catalog(&store)?;
    println!("Seeded catalog passes validation");

    // ===== Part 2: Catalog Queries =====
    println!("\n## Part 2: Catalog Queries\n");

    for museum in catalog_queries::list_museums(&store) {
        println!("• {} ({})", museum.name, museum.city);
    }

    let details = catalog_queries::get_museum_with_sections(&store, "museum-met")?
        .ok_or("seed museum missing")?;
    println!("\n{} has {} sections:", details.museum.name, details.sections.len());
    for section in &details.sections {
        println!(
            "  floor {}: {} ({} key objects)",
            section.section.floor,
            section.section.name,
            section.key_objects.len()
        );
    }

    // ===== Part 3: Search =====
    println!("\n## Part 3: Search\n");

    let hits = catalog_queries::search_museums(&store, "london");
    println!("Search 'london' matched {} museum(s)", hits.len());

    // ===== Part 4: Tour Composition =====
    println!("\n## Part 4: Tour Composition\n");

    let ctx = RequestContext::new(seed::DEMO_USER_ID);
    let section_ids: Vec<String> = details
        .sections
        .iter()
        .map(|s| s.section.id.clone())
        .collect();

    let created = tour_ops::create_tour(
        &mut store,
        &ReadWritePolicy,
        &ctx,
        "museum-met",
        "Highlights Tour",
        &section_ids,
    )?;
    println!("✓ Created '{}' with {} stops", created.tour.name, created.sections.len());

    let mine = tour_queries::list_tours_by_user(&store, seed::DEMO_USER_ID)?;
    println!("{} now has {} tour(s)", seed::DEMO_USER_ID, mine.len());

    tour_ops::delete_tour(&mut store, &ReadWritePolicy, &ctx, &created.tour.id)?;
    println!("✓ Deleted '{}'", created.tour.name);

    // ===== Part 5: Read-Only Deployments =====
    println!("\n## Part 5: Write Policy\n");

    let denied = tour_ops::create_tour(
        &mut store,
        &ReadOnlyPolicy,
        &ctx,
        "museum-met",
        "Should Not Exist",
        &section_ids,
    );
    match denied {
        Err(MuseoError::WritesDisabled { op }) => {
            println!("✓ Read-only policy rejected '{op}'");
        }
        other => println!("unexpected: {other:?}"),
    }

    validate_catalog(&store)?;
    println!("\nCatalog still valid after the full walk-through");
    Ok(())
}
