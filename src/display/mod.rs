//! Plain-text presentation of listings

use crate::models::PropertyRecord;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const EMPTY_RESULT_MESSAGE: &str = "Nenhuma propriedade encontrada com os filtros selecionados.";
pub const NOT_FOUND_MESSAGE: &str = "Propriedade não encontrada.";

/// Format a BRL amount the pt-BR way, without cents: `R$ 1.800.000`
pub fn format_brl(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if rounded < 0 {
        format!("-R$ {}", grouped)
    } else {
        format!("R$ {}", grouped)
    }
}

/// One grid card
pub fn render_card(index: usize, property: &PropertyRecord) -> String {
    let mut lines = vec![
        format!("{}. {} ({})", index, property.title, format_brl(property.price)),
        format!("   📍 {}", property.location),
        format!(
            "   {} · {} quarto(s) · {} banheiro(s)",
            property.area, property.bedrooms, property.bathrooms
        ),
    ];
    if property.has_garage() {
        lines.push(format!("   {} vaga(s) de garagem", property.garage_spaces));
    }
    lines.push(format!("   ID: {}", property.id));
    lines.join("\n")
}

/// The result grid, or the empty-state message when nothing matched
pub fn render_listing(properties: &[&PropertyRecord]) -> String {
    if properties.is_empty() {
        return EMPTY_RESULT_MESSAGE.to_string();
    }
    properties
        .iter()
        .enumerate()
        .map(|(i, property)| render_card(i + 1, property))
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn find_property(catalog: &[PropertyRecord], id: u32) -> Option<&PropertyRecord> {
    catalog.iter().find(|p| p.id == id)
}

/// Media views available on the detail page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Gallery,
    Map,
    /// 360° panorama
    Panorama,
}

impl ViewMode {
    pub fn render(self, property: &PropertyRecord) -> String {
        match self {
            ViewMode::Gallery => render_gallery(property),
            ViewMode::Map => render_map(property),
            ViewMode::Panorama => render_panorama(property),
        }
    }
}

fn render_gallery(property: &PropertyRecord) -> String {
    if property.gallery.is_empty() {
        return format!("Galeria: {}", property.image);
    }
    let mut lines = vec!["Galeria:".to_string()];
    for (i, image) in property.gallery.iter().enumerate() {
        lines.push(format!("  {} - Imagem {}: {}", property.title, i + 1, image));
    }
    lines.join("\n")
}

fn render_map(property: &PropertyRecord) -> String {
    let mut lines = vec![
        "Localização:".to_string(),
        format!("  {}, {}", property.address, property.location),
    ];
    if let Some(link) = &property.map_link {
        lines.push(format!("  Ver no Mapa: {}", link));
    }
    lines.join("\n")
}

fn render_panorama(property: &PropertyRecord) -> String {
    match &property.panorama {
        Some(url) => format!("Tour 360°: {}", url),
        None => "Tour 360° indisponível para esta propriedade.".to_string(),
    }
}

/// Full detail page: header, overview, description, features, the chosen view and contacts
pub fn render_detail(property: &PropertyRecord, view: ViewMode) -> String {
    let mut lines = vec![
        property.title.clone(),
        format!("📍 {}, {}", property.address, property.location),
        format_brl(property.price),
        String::new(),
        format!(
            "Visão Geral: {} · {} quartos · {} banheiros",
            property.area, property.bedrooms, property.bathrooms
        ),
    ];
    if property.has_garage() {
        lines.push(format!("Vagas: {}", property.garage_spaces));
    }
    if !property.description.is_empty() {
        lines.push(String::new());
        lines.push(format!("Descrição: {}", property.description));
    }
    if !property.features.is_empty() {
        lines.push(String::new());
        lines.push("Características:".to_string());
        lines.extend(property.features.iter().map(|f| format!("  ✓ {}", f)));
    }
    lines.push(String::new());
    lines.push(view.render(property));
    lines.push(String::new());
    lines.push(format!("✉ {}", property.contact.email));
    lines.push(format!("☎ {}", property.contact.phone));
    lines.join("\n")
}
