use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Part of the current campaign, shown in the main grid.
    Active,
    /// Retired, shown in the "Past Favorites" drawer.
    Archived,
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    #[default]
    Light,
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub brand_name: String,
    pub product_name: String,
    pub price: String,
    pub product_url: String,
    #[serde(default)]
    pub image: Option<String>,
    pub status: ProductStatus,
    pub campaign_id: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialKind {
    TikTok,
    Instagram,
    YouTube,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Socials {
    #[serde(default)]
    pub tiktok: Option<String>,
    #[serde(default)]
    pub instagram: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
}

impl Socials {
    pub fn get(&self, kind: SocialKind) -> Option<&str> {
        let link = match kind {
            SocialKind::TikTok => &self.tiktok,
            SocialKind::Instagram => &self.instagram,
            SocialKind::YouTube => &self.youtube,
        };
        link.as_deref().filter(|l| !l.trim().is_empty())
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct CreatorProfile {
    pub id: String,
    pub name: String,
    pub handle: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub socials: Socials,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub theme: Theme,
}

/// Splits products into (promoted, retired), keeping directory order.
pub fn partition_products(products: &[Product]) -> (Vec<Product>, Vec<Product>) {
    products
        .iter()
        .cloned()
        .partition(|p| p.status == ProductStatus::Active)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn product(id: &str, status: ProductStatus, image: Option<&str>) -> Product {
        Product {
            id: id.to_string(),
            brand_name: "Eyira".to_string(),
            product_name: format!("Product {id}"),
            price: "$26.00".to_string(),
            product_url: format!("https://shop.example/{id}"),
            image: image.map(str::to_string),
            status,
            campaign_id: "camp_004".to_string(),
            description: None,
        }
    }

    pub fn ada() -> CreatorProfile {
        CreatorProfile {
            id: "creator_001".to_string(),
            name: "Ada".to_string(),
            handle: "@adathexplora".to_string(),
            avatar: Some("/ada_profile.png".to_string()),
            bio: Some("Shop the products featured in my latest video.".to_string()),
            socials: Socials {
                tiktok: Some("https://tiktok.com/@adathexplora".to_string()),
                instagram: Some("https://www.instagram.com/adathexplora".to_string()),
                youtube: None,
            },
            products: vec![
                product("prod_001", ProductStatus::Active, None),
                product("prod_004_arch", ProductStatus::Archived, None),
                product("prod_002", ProductStatus::Active, Some("https://img.example/2.jpg")),
            ],
            theme: Theme::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn parses_directory_json() {
        let raw = r#"[{
            "id": "creator_001",
            "name": "Ada",
            "handle": "@adathexplora",
            "socials": { "instagram": "https://www.instagram.com/adathexplora" },
            "theme": "dark",
            "products": [{
                "id": "prod_001",
                "brandName": "Eyira",
                "productName": "The Jollof Base (Standard)",
                "price": "$26.00",
                "productUrl": "https://www.eyira.shop/product/standard",
                "status": "archived",
                "campaignId": "camp_004"
            }]
        }]"#;
        let creators: Vec<CreatorProfile> = serde_json::from_str(raw).unwrap();
        let ada = &creators[0];
        assert_eq!(ada.theme, Theme::Dark);
        assert_eq!(ada.avatar, None);
        assert_eq!(ada.products[0].status, ProductStatus::Archived);
        assert_eq!(ada.products[0].image, None);
        assert_eq!(
            ada.socials.get(SocialKind::Instagram),
            Some("https://www.instagram.com/adathexplora")
        );
        assert_eq!(ada.socials.get(SocialKind::TikTok), None);
    }

    #[test]
    fn partition_is_exhaustive_and_disjoint() {
        let profile = ada();
        let (promoted, retired) = partition_products(&profile.products);

        assert_eq!(promoted.len() + retired.len(), profile.products.len());
        assert!(promoted.iter().all(|p| p.status == ProductStatus::Active));
        assert!(retired.iter().all(|p| p.status == ProductStatus::Archived));
        assert!(promoted.iter().all(|p| !retired.iter().any(|r| r.id == p.id)));
        assert_eq!(
            promoted.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            ["prod_001", "prod_002"]
        );
    }

    #[test]
    fn blank_social_links_count_as_missing() {
        let socials = Socials {
            instagram: Some("  ".to_string()),
            ..Socials::default()
        };
        assert_eq!(socials.get(SocialKind::Instagram), None);
    }
}
