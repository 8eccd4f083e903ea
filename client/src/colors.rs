use egui::Color32;
use tictactoe_common::games::tictactoe::ColorTag;

pub const BOARD_BACKGROUND: Color32 = Color32::from_rgb(240, 240, 240);
pub const GRID_LINE: Color32 = Color32::from_rgb(40, 40, 40);
pub const HOVER_FILL: Color32 = Color32::from_rgba_premultiplied(40, 60, 100, 50);

pub const CONFETTI_COLORS: [Color32; 5] = [
    Color32::from_rgb(0xff, 0x07, 0x3a),
    Color32::from_rgb(0x00, 0xd9, 0xff),
    Color32::from_rgb(0xff, 0xd7, 0x00),
    Color32::from_rgb(0x00, 0xff, 0x00),
    Color32::from_rgb(0xff, 0x00, 0xff),
];

pub fn tag_color(tag: ColorTag) -> Color32 {
    match tag {
        ColorTag::Red => Color32::from_rgb(220, 50, 50),
        ColorTag::Blue => Color32::from_rgb(50, 50, 220),
    }
}
