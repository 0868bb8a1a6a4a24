use eframe::egui;

const X_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);
const O_COLOR: egui::Color32 = egui::Color32::from_rgb(50, 50, 220);

/// Mark color for the player at `index` in the rotation.
pub fn player_color(index: usize, player_count: usize) -> egui::Color32 {
    if player_count == 2 {
        return if index == 0 { X_COLOR } else { O_COLOR };
    }

    // Spread hues evenly with the golden angle so neighbours differ.
    let hue = (index as f32 * 137.5) % 360.0;
    hsl_to_rgb(hue, 0.7, 0.45)
}

fn hsl_to_rgb(hue: f32, saturation: f32, lightness: f32) -> egui::Color32 {
    let c = (1.0_f32 - (2.0_f32 * lightness - 1.0_f32).abs()) * saturation;
    let x = c * (1.0_f32 - ((hue / 60.0_f32) % 2.0_f32 - 1.0_f32).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = if hue < 60.0 {
        (c, x, 0.0)
    } else if hue < 120.0 {
        (x, c, 0.0)
    } else if hue < 180.0 {
        (0.0, c, x)
    } else if hue < 240.0 {
        (0.0, x, c)
    } else if hue < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    egui::Color32::from_rgb(
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}
