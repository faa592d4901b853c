//! Phase 1: foundation data the later phases reference.
use super::SeedItem;
use serde_json::json;

pub(crate) fn items() -> Vec<SeedItem> {
    let mut items = authors();
    items.extend(certifications());
    items.extend(categories());
    items
}

fn authors() -> Vec<SeedItem> {
    vec![
        SeedItem::new(
            "authors",
            "nguyen-van-an",
            json!({
                "name": "Nguyen Van An",
                "slug": "nguyen-van-an",
                "role": "Head of Sourcing",
                "bio": "Twenty years sourcing robusta and arabica across the Central Highlands.",
                "locale": "en"
            }),
        ),
        SeedItem::new(
            "authors",
            "sarah-mitchell",
            json!({
                "name": "Sarah Mitchell",
                "slug": "sarah-mitchell",
                "role": "Quality Director",
                "bio": "Licensed Q grader overseeing cupping and export quality control.",
                "locale": "en"
            }),
        ),
    ]
}

fn certifications() -> Vec<SeedItem> {
    [
        ("eu-organic", "EU Organic", "Certified organic production under EU regulation 2018/848."),
        ("usda-organic", "USDA Organic", "Certified organic under the USDA National Organic Program."),
        ("rainforest-alliance", "Rainforest Alliance", "Farms audited for sustainable agriculture and traceability."),
        ("fairtrade", "Fairtrade", "Fairtrade-certified supply chain with audited minimum prices."),
    ]
    .into_iter()
    .map(|(slug, name, description)| {
        SeedItem::new(
            "certifications",
            slug,
            json!({
                "name": name,
                "slug": slug,
                "description": description,
                "locale": "en"
            }),
        )
    })
    .collect()
}

fn categories() -> Vec<SeedItem> {
    vec![
        SeedItem::new(
            "categories",
            "green-coffee",
            json!({
                "name": "Green Coffee",
                "slug": "green-coffee",
                "description": "Unroasted beans prepared for export in jute or GrainPro.",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "name": "Cà phê nhân xanh",
            "description": "Hạt chưa rang, đóng bao đay hoặc GrainPro để xuất khẩu.",
            "locale": "vi"
        })),
        SeedItem::new(
            "categories",
            "roasted-coffee",
            json!({
                "name": "Roasted Coffee",
                "slug": "roasted-coffee",
                "description": "Roasted whole bean and ground coffee under private label.",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "name": "Cà phê rang",
            "description": "Cà phê rang nguyên hạt và rang xay theo nhãn riêng.",
            "locale": "vi"
        })),
        SeedItem::new(
            "categories",
            "instant-coffee",
            json!({
                "name": "Instant Coffee",
                "slug": "instant-coffee",
                "description": "Spray-dried and freeze-dried instant coffee in bulk.",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "name": "Cà phê hòa tan",
            "description": "Cà phê hòa tan sấy phun và sấy lạnh số lượng lớn.",
            "locale": "vi"
        })),
        SeedItem::new(
            "categories",
            "specialty-coffee",
            json!({
                "name": "Specialty Coffee",
                "slug": "specialty-coffee",
                "description": "Micro-lot arabica scoring 80+ points, fully traceable.",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "name": "Cà phê đặc sản",
            "description": "Arabica lô nhỏ đạt trên 80 điểm, truy xuất nguồn gốc đầy đủ.",
            "locale": "vi"
        })),
    ]
}
