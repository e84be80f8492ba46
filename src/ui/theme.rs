//! Dark palette for the lab UI.

#![allow(dead_code)]

// Background colors
pub const BACKGROUND: u32 = 0x030712;
pub const PANEL_BACKGROUND: u32 = 0x111827;
pub const CARD_BACKGROUND: u32 = 0x1f2937;
pub const CANVAS_BACKGROUND: u32 = 0x0b0f1a;
pub const BORDER_COLOR: u32 = 0x374151;
pub const HOVER_COLOR: u32 = 0x4b5563;

// Text colors
pub const TEXT_COLOR: u32 = 0xf3f4f6;
pub const TEXT_COLOR_SECONDARY: u32 = 0xd1d5db;
pub const MUTED_TEXT: u32 = 0x6b7280;

// Accent colors
pub const RED_ACCENT: u32 = 0xef4444;
pub const GREEN_ACCENT: u32 = 0x10b981;
pub const BLUE_ACCENT: u32 = 0x3b82f6;
pub const ORANGE_ACCENT: u32 = 0xf59e0b;
pub const YELLOW_ACCENT: u32 = 0xfacc15;
pub const PURPLE_ACCENT: u32 = 0xa855f7;
pub const PINK_ACCENT: u32 = 0xec4899;
pub const INDIGO_ACCENT: u32 = 0x6366f1;

// Button colors
pub const BLUE_BUTTON: u32 = 0x2563eb;
pub const BLUE_BUTTON_HOVER: u32 = 0x3b82f6;
pub const GREEN_BUTTON: u32 = 0x16a34a;
pub const GREEN_BUTTON_HOVER: u32 = 0x22c55e;
pub const PURPLE_BUTTON: u32 = 0x9333ea;
pub const PURPLE_BUTTON_HOVER: u32 = 0xa855f7;
pub const PINK_BUTTON: u32 = 0xdb2777;
pub const PINK_BUTTON_HOVER: u32 = 0xec4899;
pub const INDIGO_BUTTON: u32 = 0x4f46e5;
pub const INDIGO_BUTTON_HOVER: u32 = 0x6366f1;
pub const ORANGE_BUTTON: u32 = 0xea580c;
pub const ORANGE_BUTTON_HOVER: u32 = 0xf97316;
pub const YELLOW_BUTTON: u32 = 0xca8a04;
pub const YELLOW_BUTTON_HOVER: u32 = 0xeab308;
