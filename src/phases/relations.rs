//! Phase 4: connect earlier-created entries to each other.
//!
//! Links are declared by slug; the runner resolves slugs to remote ids
//! through the ledger, so this phase only works against entries recorded by
//! phases 1-3 (of this run or an earlier one).
use super::RelationLink;

const fn link(
    content_type: &'static str,
    slug: &'static str,
    field: &'static str,
    target_type: &'static str,
    target_slugs: &'static [&'static str],
) -> RelationLink {
    RelationLink {
        content_type,
        slug,
        field,
        target_type,
        target_slugs,
    }
}

pub(crate) fn links() -> Vec<RelationLink> {
    vec![
        // Products into their catalog categories.
        link("products", "robusta-grade-1", "categories", "categories", &["green-coffee"]),
        link("products", "robusta-honey-process", "categories", "categories", &["green-coffee"]),
        link(
            "products",
            "arabica-cau-dat",
            "categories",
            "categories",
            &["green-coffee", "specialty-coffee"],
        ),
        link("products", "roasted-blend-classic", "categories", "categories", &["roasted-coffee"]),
        link("products", "instant-spray-dried", "categories", "categories", &["instant-coffee"]),
        // Certifications held per product.
        link(
            "products",
            "robusta-grade-1",
            "certifications",
            "certifications",
            &["rainforest-alliance"],
        ),
        link(
            "products",
            "robusta-honey-process",
            "certifications",
            "certifications",
            &["eu-organic", "usda-organic"],
        ),
        link(
            "products",
            "arabica-cau-dat",
            "certifications",
            "certifications",
            &["fairtrade", "rainforest-alliance"],
        ),
        // Knowledge articles get their authors and a home category.
        link(
            "knowledge-articles",
            "wet-and-honey-processing",
            "authors",
            "authors",
            &["nguyen-van-an"],
        ),
        link(
            "knowledge-articles",
            "robusta-grading-guide",
            "authors",
            "authors",
            &["sarah-mitchell"],
        ),
        link(
            "knowledge-articles",
            "container-preparation",
            "authors",
            "authors",
            &["nguyen-van-an"],
        ),
        link(
            "knowledge-articles",
            "wet-and-honey-processing",
            "categories",
            "categories",
            &["green-coffee"],
        ),
        link(
            "knowledge-articles",
            "robusta-grading-guide",
            "categories",
            "categories",
            &["green-coffee"],
        ),
        link(
            "knowledge-articles",
            "container-preparation",
            "categories",
            "categories",
            &["green-coffee"],
        ),
    ]
}
