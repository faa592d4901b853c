//! Phase 2: products, services, testimonials, and knowledge articles.
use super::SeedItem;
use crate::richtext;
use serde_json::json;

pub(crate) fn items() -> Vec<SeedItem> {
    let mut items = products();
    items.extend(services());
    items.extend(testimonials());
    items.extend(knowledge_articles());
    items
}

fn products() -> Vec<SeedItem> {
    vec![
        SeedItem::new(
            "products",
            "robusta-grade-1",
            json!({
                "name": "Robusta Grade 1",
                "slug": "robusta-grade-1",
                "summary": "Screen 16, max 0.5% black and broken, wet polished on request.",
                "origin": "Dak Lak",
                "moq": "1 x 20ft container",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "name": "Robusta loại 1",
            "summary": "Sàng 16, tối đa 0,5% hạt đen vỡ, đánh bóng ướt theo yêu cầu.",
            "locale": "vi"
        })),
        SeedItem::new(
            "products",
            "robusta-honey-process",
            json!({
                "name": "Robusta Honey Process",
                "slug": "robusta-honey-process",
                "summary": "Honey-processed robusta with pronounced sweetness and body.",
                "origin": "Gia Lai",
                "moq": "60 bags",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "name": "Robusta chế biến mật ong",
            "summary": "Robusta chế biến mật ong, vị ngọt đậm và thể chất dày.",
            "locale": "vi"
        })),
        SeedItem::new(
            "products",
            "arabica-cau-dat",
            json!({
                "name": "Arabica Cau Dat",
                "slug": "arabica-cau-dat",
                "summary": "Washed arabica from 1,500m, bright acidity, caramel finish.",
                "origin": "Lam Dong",
                "moq": "30 bags",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "name": "Arabica Cầu Đất",
            "summary": "Arabica chế biến ướt từ độ cao 1.500m, chua sáng, hậu vị caramel.",
            "locale": "vi"
        })),
        SeedItem::new(
            "products",
            "roasted-blend-classic",
            json!({
                "name": "Classic Roast Blend",
                "slug": "roasted-blend-classic",
                "summary": "70/30 robusta-arabica blend roasted to order for private label.",
                "origin": "Buon Ma Thuot",
                "moq": "500 kg",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "name": "Cà phê rang phối trộn truyền thống",
            "summary": "Phối trộn 70/30 robusta-arabica, rang theo đơn cho nhãn riêng.",
            "locale": "vi"
        })),
        SeedItem::new(
            "products",
            "instant-spray-dried",
            json!({
                "name": "Spray-Dried Instant",
                "slug": "instant-spray-dried",
                "summary": "Bulk spray-dried instant coffee, 25kg cartons, OEM packing available.",
                "origin": "Binh Duong",
                "moq": "5 tonnes",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "name": "Cà phê hòa tan sấy phun",
            "summary": "Cà phê hòa tan sấy phun, thùng 25kg, nhận đóng gói OEM.",
            "locale": "vi"
        })),
    ]
}

fn services() -> Vec<SeedItem> {
    vec![
        SeedItem::new(
            "services",
            "private-label",
            json!({
                "name": "Private Label & OEM",
                "slug": "private-label",
                "description": "Roasting, grinding, and packing under your brand, from 500 kg per run.",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "name": "Gia công nhãn riêng & OEM",
            "description": "Rang, xay và đóng gói theo thương hiệu của bạn, từ 500 kg mỗi lô.",
            "locale": "vi"
        })),
        SeedItem::new(
            "services",
            "green-sourcing",
            json!({
                "name": "Green Coffee Sourcing",
                "slug": "green-sourcing",
                "description": "Farm-gate sourcing with pre-shipment samples and contract grading.",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "name": "Thu mua cà phê nhân",
            "description": "Thu mua tại nông hộ, gửi mẫu trước khi giao và phân loại theo hợp đồng.",
            "locale": "vi"
        })),
        SeedItem::new(
            "services",
            "export-logistics",
            json!({
                "name": "Export Logistics",
                "slug": "export-logistics",
                "description": "FOB and CIF shipments with full export documentation handled in-house.",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "name": "Hậu cần xuất khẩu",
            "description": "Giao hàng FOB và CIF, chứng từ xuất khẩu xử lý trọn gói.",
            "locale": "vi"
        })),
        SeedItem::new(
            "services",
            "quality-control",
            json!({
                "name": "Quality Control",
                "slug": "quality-control",
                "description": "Pre-shipment cupping, moisture and screen analysis for every lot.",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "name": "Kiểm soát chất lượng",
            "description": "Thử nếm trước khi giao, phân tích độ ẩm và cỡ sàng cho từng lô.",
            "locale": "vi"
        })),
    ]
}

fn testimonials() -> Vec<SeedItem> {
    vec![
        SeedItem::new(
            "testimonials",
            "hamburg-roastery",
            json!({
                "customer": "Import manager, Hamburg roastery",
                "quote": "Three seasons running and every container has matched the approval sample.",
                "country": "Germany",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "customer": "Quản lý nhập khẩu, xưởng rang Hamburg",
            "quote": "Ba vụ liên tiếp, mọi container đều đúng với mẫu duyệt.",
            "country": "Đức",
            "locale": "vi"
        })),
        SeedItem::new(
            "testimonials",
            "seoul-distributor",
            json!({
                "customer": "Purchasing lead, Seoul distributor",
                "quote": "Documentation is spotless and the honey-process robusta sells itself.",
                "country": "South Korea",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "customer": "Trưởng bộ phận thu mua, nhà phân phối Seoul",
            "quote": "Chứng từ hoàn hảo và robusta mật ong tự bán được hàng.",
            "country": "Hàn Quốc",
            "locale": "vi"
        })),
        SeedItem::new(
            "testimonials",
            "melbourne-chain",
            json!({
                "customer": "Founder, Melbourne cafe chain",
                "quote": "Their private-label line let us launch a house blend in under two months.",
                "country": "Australia",
                "locale": "en"
            }),
        )
        .with_translation(json!({
            "customer": "Nhà sáng lập, chuỗi cà phê Melbourne",
            "quote": "Dòng nhãn riêng giúp chúng tôi ra mắt blend riêng trong chưa đầy hai tháng.",
            "country": "Úc",
            "locale": "vi"
        })),
    ]
}

const ARTICLE_PROCESSING_EN: &str = "## From cherry to green bean\n\n\
Harvested cherries are floated to remove unripe fruit, then pulped within \
twelve hours. Washed lots ferment for thirty-six to forty-eight hours before \
drying on raised beds; honey-processed lots keep part of the mucilage through \
drying, which deepens sweetness. Moisture is brought down to 12.5% before \
hulling and color sorting.";

const ARTICLE_PROCESSING_VI: &str = "## Từ quả chín đến cà phê nhân\n\n\
Quả thu hoạch được đãi nổi để loại quả xanh, sau đó xát vỏ trong vòng mười hai \
giờ. Lô chế biến ướt lên men từ ba mươi sáu đến bốn mươi tám giờ rồi phơi trên \
giàn; lô mật ong giữ lại một phần chất nhầy trong khi phơi nên vị ngọt sâu hơn. \
Độ ẩm được đưa về 12,5% trước khi xát khô và bắn màu.";

const ARTICLE_GRADING_EN: &str = "## How Vietnamese robusta is graded\n\n\
Export grades follow screen size, defect count, and moisture. Grade 1 means \
screen 16 with at most 0.5% black and broken beans. Buyers should always \
confirm whether polishing and double sorting are included, since both change \
the cup and the price.";

const ARTICLE_GRADING_VI: &str = "## Phân loại robusta Việt Nam\n\n\
Tiêu chuẩn xuất khẩu dựa trên cỡ sàng, tỷ lệ lỗi và độ ẩm. Loại 1 nghĩa là sàng \
16 với tối đa 0,5% hạt đen vỡ. Người mua nên xác nhận có bao gồm đánh bóng và \
phân loại hai lần hay không, vì cả hai đều thay đổi chất lượng tách và giá.";

const ARTICLE_SHIPPING_EN: &str = "## Preparing a container for the monsoon\n\n\
Green coffee crossing the equator in jute alone risks condensation damage. We \
line containers with kraft paper, load GrainPro-bagged lots away from the \
doors, and fix silica desiccant along the ceiling rail. Documentation travels \
ahead of the vessel so clearance starts before arrival.";

const ARTICLE_SHIPPING_VI: &str = "## Chuẩn bị container mùa mưa\n\n\
Cà phê nhân vượt xích đạo chỉ với bao đay dễ hỏng do ngưng tụ hơi nước. Chúng \
tôi lót giấy kraft trong container, xếp các lô đóng GrainPro xa cửa và gắn túi \
hút ẩm silica dọc trần. Chứng từ gửi trước tàu để thông quan bắt đầu trước khi \
hàng đến.";

fn article(
    slug: &'static str,
    title: &str,
    body: &str,
    title_vi: &str,
    body_vi: &str,
) -> SeedItem {
    SeedItem::new(
        "knowledge-articles",
        slug,
        json!({
            "title": title,
            "slug": slug,
            "body": body,
            "wordCount": richtext::word_count(body),
            "readTime": richtext::read_time_minutes(body),
            "locale": "en"
        }),
    )
    .with_translation(json!({
        "title": title_vi,
        "body": body_vi,
        "wordCount": richtext::word_count(body_vi),
        "readTime": richtext::read_time_minutes(body_vi),
        "locale": "vi"
    }))
}

fn knowledge_articles() -> Vec<SeedItem> {
    vec![
        article(
            "wet-and-honey-processing",
            "Wet and Honey Processing Explained",
            ARTICLE_PROCESSING_EN,
            "Giải thích chế biến ướt và mật ong",
            ARTICLE_PROCESSING_VI,
        ),
        article(
            "robusta-grading-guide",
            "A Buyer's Guide to Robusta Grading",
            ARTICLE_GRADING_EN,
            "Cẩm nang phân loại robusta cho người mua",
            ARTICLE_GRADING_VI,
        ),
        article(
            "container-preparation",
            "Container Preparation for Ocean Freight",
            ARTICLE_SHIPPING_EN,
            "Chuẩn bị container cho vận tải biển",
            ARTICLE_SHIPPING_VI,
        ),
    ]
}
