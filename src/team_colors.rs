use std::collections::HashMap;

use once_cell::sync::Lazy;
use ratatui::style::Color;

/// Fallback identity for teams without a configured entry.
pub const DEFAULT_BADGE: (&str, &str) = ("#808080", "#C0C0C0");

// Static configuration, not derived data. Primary/secondary kit colors.
const TABLE: &[(&str, (&str, &str))] = &[
    ("Boca Juniors", ("#000080", "#FFD700")),
    ("River Plate", ("#FF0000", "#FFFFFF")),
    ("Rosario Central", ("#000080", "#FFD700")),
    ("San Lorenzo", ("#000080", "#FF0000")),
    ("Belgrano", ("#00BFFF", "#333333")),
    ("Instituto", ("#FF0000", "#FFFFFF")),
    ("Racing", ("#87CEEB", "#FFFFFF")),
    ("Independiente", ("#FF0000", "#FFFFFF")),
    ("Newell's", ("#FF0000", "#000000")),
    ("Estudiantes (LP)", ("#FF0000", "#FFFFFF")),
    ("Gimnasia (LP)", ("#FFFFFF", "#000080")),
    ("Velez Sarsfield", ("#000080", "#FFFFFF")),
    ("Huracán", ("#FF0000", "#FFFFFF")),
    ("Argentinos Juniors", ("#FF0000", "#FFFFFF")),
    ("Unión (SF)", ("#FF0000", "#FFFFFF")),
    ("Colón", ("#000000", "#FF0000")),
    ("Lanus", ("#800000", "#FFFFFF")),
    ("Banfield", ("#008000", "#FFFFFF")),
    ("Talleres", ("#0056B3", "#FFFFFF")),
    ("9 de Julio (M)", ("#87CEEB", "#FFFFFF")),
    ("Alianza Lima", ("#000080", "#FFFFFF")),
    ("Aldosivi", ("#008000", "#FFFF00")),
    ("All Boys", ("#FFFFFF", "#000000")),
    ("Almagro", ("#000080", "#000000")),
    ("Almirante Brown", ("#000000", "#FFFF00")),
    ("Alumni", ("#FF0000", "#FFFFFF")),
    ("Alvarado", ("#000080", "#FFFFFF")),
    ("América", ("#FFFF00", "#000080")),
    ("Arsenal", ("#87CEEB", "#FF0000")),
    ("Atlanta", ("#000080", "#FFFF00")),
    ("Atlético Rafaela", ("#87CEEB", "#FFFFFF")),
    ("Atlético Paraná", ("#FF0000", "#FFFFFF")),
    ("Atlético Tucumán", ("#87CEEB", "#FFFFFF")),
    ("Barcelona", ("#FFFF00", "#FF0000")),
    ("Ben Hur", ("#FFFFFF", "#000080")),
    ("Boca Unidos", ("#FF0000", "#FFFF00")),
    ("Bragantino", ("#FFFFFF", "#000000")),
    ("Brown", ("#87CEEB", "#FF0000")),
    ("CAI", ("#000080", "#FFFFFF")),
    ("Central Córdoba (R)", ("#000080", "#FFFFFF")),
    ("Central Córdoba (SdE)", ("#000000", "#FFFFFF")),
    ("Central Norte (S)", ("#000000", "#FFFFFF")),
    ("Centro Sportivo Alagoano", ("#000080", "#FFFFFF")),
    ("Chacarita", ("#FF0000", "#000000")),
    ("Chaco For Ever", ("#000000", "#FFFFFF")),
    ("Cipolletti", ("#000000", "#FFFFFF")),
    ("Cobresal", ("#FFA500", "#FFFFFF")),
    ("Cortuluá", ("#FF0000", "#008000")),
    ("Crucero del Norte", ("#FFFF00", "#FF0000")),
    ("Defensa y Justicia", ("#008000", "#FFFF00")),
    ("Defensores de Belgrano (BA)", ("#FF0000", "#000000")),
    ("Defensores de Belgrano (VR)", ("#FF0000", "#FFFFFF")),
    ("Deportes Concepción", ("#8A2BE2", "#FFFFFF")),
    ("Deportes Tolima", ("#FFFF00", "#A52A2A")),
    ("Deportivo Laferrere", ("#008000", "#FFFFFF")),
    ("Deportivo Maipú", ("#FF0000", "#FFFFFF")),
    ("Deportivo Morón", ("#FF0000", "#FFFFFF")),
    ("Deportivo Roca", ("#FFA500", "#FFFFFF")),
    ("Desamparados", ("#008000", "#FFFFFF")),
    ("Douglas Haig", ("#FF0000", "#000000")),
    ("El Porvenir", ("#FFFFFF", "#000000")),
    ("Emelec", ("#000080", "#FFFFFF")),
    ("Estudiantes (BA)", ("#FFFFFF", "#000000")),
    ("Estudiantes (RC)", ("#87CEEB", "#FFFFFF")),
    ("Estudiantes (SL)", ("#008000", "#FFFFFF")),
    ("Ferro", ("#008000", "#FFFFFF")),
    ("Ferro Carril Oeste (GP)", ("#008000", "#FFFFFF")),
    ("Flamengo", ("#FF0000", "#000000")),
    ("Gimnasia y Esgrima (CdU)", ("#87CEEB", "#FFFFFF")),
    ("Gimnasia y Esgrima (J)", ("#87CEEB", "#FFFFFF")),
    ("Gimnasia y Esgrima (M)", ("#87CEEB", "#FFFFFF")),
    ("Gimnasia y Tiro (S)", ("#87CEEB", "#FFFFFF")),
    ("Godoy Cruz", ("#000080", "#FFFFFF")),
    ("Grêmio", ("#000080", "#000000")),
    ("Guaraní Antonio Franco", ("#FF0000", "#000080")),
    ("Guillermo Brown", ("#000080", "#FFFFFF")),
    ("Gutiérrez SC", ("#87CEEB", "#FFFFFF")),
    ("Huracán Corrientes", ("#FF0000", "#FFFFFF")),
    ("Huracán (TA)", ("#FF0000", "#FFFFFF")),
    ("Independiente (Ch)", ("#FF0000", "#FFFFFF")),
    ("Independiente Petrolero", ("#FF0000", "#FFFFFF")),
    ("Independiente Rivadavia", ("#000080", "#FFFFFF")),
    ("Ituzaingó", ("#008000", "#FFFFFF")),
    ("Juventud Antoniana", ("#000080", "#FFFFFF")),
    ("Juventud Unida (G)", ("#87CEEB", "#FFFFFF")),
    ("Juventud Unida Universitario", ("#FFFF00", "#000080")),
    ("Libertad", ("#000000", "#FFFFFF")),
    ("Los Andes", ("#FF0000", "#FFFFFF")),
    ("Mitre (SdE)", ("#FFFF00", "#000000")),
    ("Nueva Chicago", ("#000000", "#008000")),
    ("Olimpo", ("#FFFF00", "#000000")),
    ("Palestino", ("#FF0000", "#008000")),
    ("Paraná", ("#FF0000", "#000080")),
    ("Patronato", ("#FF0000", "#000000")),
    ("Peñarol", ("#FFFF00", "#000000")),
    ("Platense", ("#FFFFFF", "#A52A2A")),
    ("Quilmes", ("#FFFFFF", "#000080")),
    ("Racing (CBA)", ("#87CEEB", "#FFFFFF")),
    ("Racing (O)", ("#87CEEB", "#FFFFFF")),
    ("San Jorge (T)", ("#008000", "#FFFFFF")),
    ("San Martín (M)", ("#FF0000", "#FFFFFF")),
    ("San Martín (SJ)", ("#008000", "#000000")),
    ("San Martín (T)", ("#FF0000", "#FFFFFF")),
    ("Santamaria", ("#FFFF00", "#000000")),
    ("Sao Paulo (BRA)", ("#FF0000", "#000000")),
    ("Sarmiento", ("#008000", "#FFFFFF")),
    ("Sol de América", ("#000080", "#FFFFFF")),
    ("Sporting Cristal", ("#87CEEB", "#FFFFFF")),
    ("Sportivo Belgrano (SF)", ("#008000", "#008000")),
    ("Sportivo Italiano", ("#000080", "#FFFFFF")),
    ("Sportivo Las Parejas", ("#FF0000", "#008000")),
    ("Talleres (RdE)", ("#FF0000", "#FFFFFF")),
    ("Tigre", ("#000080", "#FF0000")),
    ("Tiro Federal (BB)", ("#FFFF00", "#000000")),
    ("Tiro Federal (R)", ("#000080", "#FFFFFF")),
    ("Unión Aconquija", ("#A52A2A", "#87CEEB")),
    ("Unión (MdP)", ("#87CEEB", "#FFFFFF")),
    ("Unión (S)", ("#008000", "#FFFFFF")),
    ("Unión (VK)", ("#008000", "#FFFFFF")),
    ("Universidad Católica", ("#000080", "#FFFFFF")),
    ("Villa Dálmine", ("#8A2BE2", "#FFFFFF")),
    ("Villa Mitre", ("#008000", "#000000")),
    ("Villa San Carlos", ("#87CEEB", "#FFFFFF")),
];

static BY_NAME: Lazy<HashMap<&'static str, (&'static str, &'static str)>> =
    Lazy::new(|| TABLE.iter().copied().collect());

/// Hex color pair for a team, falling back to the gray/silver default.
pub fn badge_hex(name: &str) -> (&'static str, &'static str) {
    BY_NAME.get(name).copied().unwrap_or(DEFAULT_BADGE)
}

/// Terminal color pair for a team badge. Total over all strings.
pub fn badge_colors(name: &str) -> (Color, Color) {
    let (primary, secondary) = badge_hex(name);
    (hex_color(primary), hex_color(secondary))
}

pub fn hex_color(hex: &str) -> Color {
    parse_hex(hex).unwrap_or(Color::Gray)
}

fn parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
