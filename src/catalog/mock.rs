use crate::catalog::traits::CatalogProvider;
use crate::models::{Catalog, Contact, PropertyRecord};
use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Fixed location labels offered by the location autocomplete
pub const MOCK_LOCATIONS: &[&str] = &[
    "Guarulhos, São Paulo",
    "São Paulo, São Paulo",
    "Campinas, São Paulo",
    "Rio de Janeiro, Rio de Janeiro",
    "Belo Horizonte, Minas Gerais",
    "Curitiba, Paraná",
    "Porto Alegre, Rio Grande do Sul",
    "Salvador, Bahia",
    "Fortaleza, Ceará",
    "Brasília, Distrito Federal",
    "Recife, Pernambuco",
    "Manaus, Amazonas",
    "Goiânia, Goiás",
    "Belém, Pará",
    "Joaçaba, Santa Catarina",
];

/// Hard-coded showcase listings
pub struct MockCatalog;

impl MockCatalog {
    pub fn new() -> Self {
        Self
    }

    pub fn locations() -> &'static [&'static str] {
        MOCK_LOCATIONS
    }
}

impl Default for MockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogProvider for MockCatalog {
    async fn load(&self) -> Result<Catalog> {
        let records = mock_properties();
        info!("📋 Loaded {} mock showcase properties", records.len());
        Ok(Catalog::new(self.source_name(), records))
    }

    fn source_name(&self) -> &'static str {
        "Mock"
    }
}

fn showcase_contact() -> Contact {
    Contact {
        email: "contato@imovelshowcase.com.br".to_string(),
        phone: "(11) 4002-8922".to_string(),
    }
}

/// The showcase listings, in display order
pub fn mock_properties() -> Vec<PropertyRecord> {
    vec![
        PropertyRecord {
            id: 1,
            title: "Apartamento de Luxo com Vista Panorâmica".to_string(),
            location: "Copacabana, Rio de Janeiro".to_string(),
            price: 2_500_000.0,
            bedrooms: 3,
            bathrooms: 4,
            garage_spaces: 2,
            area: "1.800 m²".to_string(),
            image: "/images/hero.png".to_string(),
            gallery: vec![
                "/images/hero.png".to_string(),
                "/images/gallery/1-1.jpg".to_string(),
                "/images/gallery/1-2.jpg".to_string(),
            ],
            description: "Apartamento de frente para o mar com vista panorâmica da praia de Copacabana, varanda gourmet e acabamento de alto padrão.".to_string(),
            features: vec![
                "Vista para o mar".to_string(),
                "Varanda gourmet".to_string(),
                "Piscina".to_string(),
                "Academia".to_string(),
                "Portaria 24h".to_string(),
            ],
            address: "Av. Atlântica, 1702".to_string(),
            map_link: Some("https://maps.google.com/?q=Av.+Atlântica+1702+Rio+de+Janeiro".to_string()),
            panorama: Some("/images/panorama/1.jpg".to_string()),
            contact: showcase_contact(),
        },
        PropertyRecord {
            id: 2,
            title: "Estúdio Moderno no Coração da Cidade".to_string(),
            location: "Pinheiros, São Paulo".to_string(),
            price: 1_800_000.0,
            bedrooms: 2,
            bathrooms: 3,
            garage_spaces: 1,
            area: "600 m²".to_string(),
            image: "/images/hero.png".to_string(),
            gallery: vec![
                "/images/hero.png".to_string(),
                "/images/gallery/2-1.jpg".to_string(),
                "/images/gallery/2-2.jpg".to_string(),
            ],
            description: "Estúdio moderno a poucos passos do metrô, com planta integrada e muita luz natural.".to_string(),
            features: vec![
                "Planta integrada".to_string(),
                "Próximo ao metrô".to_string(),
                "Coworking no prédio".to_string(),
            ],
            address: "Rua dos Pinheiros, 870".to_string(),
            map_link: Some("https://maps.google.com/?q=Rua+dos+Pinheiros+870+São+Paulo".to_string()),
            panorama: None,
            contact: showcase_contact(),
        },
        PropertyRecord {
            id: 3,
            title: "Casa Espaçosa com Jardim Privativo".to_string(),
            location: "Jurerê Internacional, Florianópolis".to_string(),
            price: 2_800_000.0,
            bedrooms: 4,
            bathrooms: 5,
            garage_spaces: 3,
            area: "2.500 m²".to_string(),
            image: "/images/hero.png".to_string(),
            gallery: vec![
                "/images/hero.png".to_string(),
                "/images/gallery/3-1.jpg".to_string(),
                "/images/gallery/3-2.jpg".to_string(),
            ],
            description: "Casa térrea com jardim privativo, área de lazer completa e a poucos minutos da praia.".to_string(),
            features: vec![
                "Jardim privativo".to_string(),
                "Piscina".to_string(),
                "Churrasqueira".to_string(),
                "Energia solar".to_string(),
            ],
            address: "Av. dos Búzios, 1460".to_string(),
            map_link: Some("https://maps.google.com/?q=Av.+dos+Búzios+1460+Florianópolis".to_string()),
            panorama: Some("/images/panorama/3.jpg".to_string()),
            contact: showcase_contact(),
        },
        PropertyRecord {
            id: 4,
            title: "Loft Urbano com Design Contemporâneo".to_string(),
            location: "Centro, Salvador".to_string(),
            price: 1_950_000.0,
            bedrooms: 2,
            bathrooms: 2,
            garage_spaces: 0,
            area: "950 m²".to_string(),
            image: "/images/hero.png".to_string(),
            gallery: vec![
                "/images/hero.png".to_string(),
                "/images/gallery/4-1.jpg".to_string(),
                "/images/gallery/4-2.jpg".to_string(),
            ],
            description: "Loft com pé-direito duplo em prédio histórico restaurado no centro da cidade.".to_string(),
            features: vec![
                "Pé-direito duplo".to_string(),
                "Prédio histórico".to_string(),
                "Terraço".to_string(),
            ],
            address: "Rua Chile, 22".to_string(),
            map_link: Some("https://maps.google.com/?q=Rua+Chile+22+Salvador".to_string()),
            panorama: None,
            contact: showcase_contact(),
        },
        PropertyRecord {
            id: 5,
            title: "Residência Exclusiva em Condomínio Fechado".to_string(),
            location: "Alphaville, São Paulo".to_string(),
            price: 2_200_000.0,
            bedrooms: 3,
            bathrooms: 3,
            garage_spaces: 2,
            area: "1.600 m²".to_string(),
            image: "/images/hero.png".to_string(),
            gallery: vec![
                "/images/hero.png".to_string(),
                "/images/gallery/5-1.jpg".to_string(),
                "/images/gallery/5-2.jpg".to_string(),
            ],
            description: "Residência em condomínio fechado com segurança 24h, clube e áreas verdes.".to_string(),
            features: vec![
                "Condomínio fechado".to_string(),
                "Segurança 24h".to_string(),
                "Clube".to_string(),
                "Área verde".to_string(),
            ],
            address: "Alameda Rio Negro, 500".to_string(),
            map_link: Some("https://maps.google.com/?q=Alameda+Rio+Negro+500+São+Paulo".to_string()),
            panorama: None,
            contact: showcase_contact(),
        },
        PropertyRecord {
            id: 6,
            title: "Apartamento Clássico com Charme Histórico".to_string(),
            location: "Santa Teresa, Rio de Janeiro".to_string(),
            price: 2_100_000.0,
            bedrooms: 3,
            bathrooms: 2,
            garage_spaces: 0,
            area: "1.200 m²".to_string(),
            image: "/images/hero.png".to_string(),
            gallery: vec![
                "/images/hero.png".to_string(),
                "/images/gallery/6-1.jpg".to_string(),
                "/images/gallery/6-2.jpg".to_string(),
            ],
            description: "Apartamento em casarão do início do século XX, com janelas originais e vista para a baía.".to_string(),
            features: vec![
                "Arquitetura histórica".to_string(),
                "Vista para a baía".to_string(),
                "Pisos de madeira".to_string(),
            ],
            address: "Rua Almirante Alexandrino, 1200".to_string(),
            map_link: None,
            panorama: Some("/images/panorama/6.jpg".to_string()),
            contact: showcase_contact(),
        },
        PropertyRecord {
            id: 7,
            title: "Cobertura Duplex com Vista Deslumbrante".to_string(),
            location: "Leblon, Rio de Janeiro".to_string(),
            price: 3_000_000.0,
            bedrooms: 5,
            bathrooms: 6,
            garage_spaces: 4,
            area: "3.000 m²".to_string(),
            image: "/images/hero.png".to_string(),
            gallery: vec![
                "/images/hero.png".to_string(),
                "/images/gallery/7-1.jpg".to_string(),
                "/images/gallery/7-2.jpg".to_string(),
            ],
            description: "Cobertura duplex com piscina privativa e vista deslumbrante para o mar do Leblon.".to_string(),
            features: vec![
                "Piscina privativa".to_string(),
                "Vista para o mar".to_string(),
                "Home theater".to_string(),
                "Adega".to_string(),
            ],
            address: "Av. Delfim Moreira, 630".to_string(),
            map_link: Some("https://maps.google.com/?q=Av.+Delfim+Moreira+630+Rio+de+Janeiro".to_string()),
            panorama: Some("/images/panorama/7.jpg".to_string()),
            contact: showcase_contact(),
        },
        PropertyRecord {
            id: 8,
            title: "Studio Compacto e Funcional".to_string(),
            location: "Moema, São Paulo".to_string(),
            price: 1_850_000.0,
            bedrooms: 1,
            bathrooms: 1,
            garage_spaces: 1,
            area: "550 m²".to_string(),
            image: "/images/hero.png".to_string(),
            gallery: vec![
                "/images/hero.png".to_string(),
                "/images/gallery/8-1.jpg".to_string(),
                "/images/gallery/8-2.jpg".to_string(),
            ],
            description: "Studio compacto e funcional próximo ao Parque Ibirapuera.".to_string(),
            features: vec![
                "Mobiliado".to_string(),
                "Próximo ao parque".to_string(),
                "Lavanderia".to_string(),
            ],
            address: "Av. Ibirapuera, 2900".to_string(),
            map_link: None,
            panorama: None,
            contact: showcase_contact(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn loads_eight_listings() {
        let catalog = MockCatalog::new().load().await.unwrap();
        assert_eq!(catalog.len(), 8);
        assert_eq!(catalog.source, "Mock");
        assert_eq!(catalog.records[0].location, "Copacabana, Rio de Janeiro");
    }

    #[test]
    fn prices_fall_in_showcase_range() {
        assert!(mock_properties()
            .iter()
            .all(|p| (1_800_000.0..=3_000_000.0).contains(&p.price)));
    }

    #[test]
    fn catalog_mixes_garage_and_no_garage() {
        let records = mock_properties();
        assert!(records.iter().any(|p| p.has_garage()));
        assert!(records.iter().any(|p| !p.has_garage()));
    }

    #[test]
    fn fifteen_known_locations() {
        assert_eq!(MockCatalog::locations().len(), 15);
    }
}
