//! Phase 3: the marketing pages the site renders from CMS content.
use super::SeedItem;
use serde_json::json;

pub(crate) fn items() -> Vec<SeedItem> {
    vec![
        SeedItem::new(
            "pages",
            "home",
            json!({
                "title": "Vietnamese Coffee, Export Grade",
                "slug": "home",
                "description": "Robusta, arabica, and instant coffee shipped worldwide from origin.",
                "hero": "Direct from the Central Highlands to your roastery.",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "title": "Cà phê Việt Nam, chuẩn xuất khẩu",
            "description": "Robusta, arabica và cà phê hòa tan giao toàn cầu từ vùng nguyên liệu.",
            "hero": "Từ Tây Nguyên đến xưởng rang của bạn.",
            "locale": "vi"
        })),
        SeedItem::new(
            "pages",
            "about",
            json!({
                "title": "About Us",
                "slug": "about",
                "description": "Two decades exporting coffee from Dak Lak, Gia Lai, and Lam Dong.",
                "body": "We work farm-gate with growing families and run our own mill, so every lot is traceable from hillside to container.",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "title": "Về chúng tôi",
            "description": "Hai mươi năm xuất khẩu cà phê từ Đắk Lắk, Gia Lai và Lâm Đồng.",
            "body": "Chúng tôi thu mua tại nông hộ và vận hành nhà máy riêng, nên mọi lô hàng đều truy xuất được từ sườn đồi đến container.",
            "locale": "vi"
        })),
        SeedItem::new(
            "pages",
            "sustainability",
            json!({
                "title": "Sustainability",
                "slug": "sustainability",
                "description": "Certified farms, audited pricing, and shade-grown replanting programs.",
                "body": "Certification is the floor, not the ceiling. Premiums fund drip irrigation and intercropping so farms stay productive through dry seasons.",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "title": "Phát triển bền vững",
            "description": "Nông trại đạt chứng nhận, giá thu mua minh bạch, chương trình tái canh dưới tán.",
            "body": "Chứng nhận là mức sàn, không phải mức trần. Khoản phụ trội tài trợ tưới nhỏ giọt và xen canh để nông trại vững qua mùa khô.",
            "locale": "vi"
        })),
        SeedItem::new(
            "pages",
            "contact",
            json!({
                "title": "Contact",
                "slug": "contact",
                "description": "Request samples, pricing, or a call with our export team.",
                "body": "Offices in Buon Ma Thuot and Ho Chi Minh City. Samples ship within three working days of request.",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "title": "Liên hệ",
            "description": "Yêu cầu mẫu, báo giá hoặc trao đổi với đội xuất khẩu.",
            "body": "Văn phòng tại Buôn Ma Thuột và TP. Hồ Chí Minh. Mẫu gửi trong vòng ba ngày làm việc.",
            "locale": "vi"
        })),
    ]
}
