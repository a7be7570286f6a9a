//! Category icons.

/// Icon for any category without a dedicated one.
pub const FALLBACK_ICON: &str = "fa-solid fa-star";

/// Icon class for a category. Unknown categories get [`FALLBACK_ICON`].
pub fn category_icon(category: &str) -> &'static str {
    match category {
        "AI Tools" => "fa-solid fa-brain",
        "Games" => "fa-solid fa-gamepad",
        "Calculators" => "fa-solid fa-calculator",
        "Health & Fitness" => "fa-solid fa-heart-pulse",
        "Forms & UI" => "fa-solid fa-object-group",
        "Generators" => "fa-solid fa-wand-magic-sparkles",
        "System & Hardware" => "fa-solid fa-microchip",
        "Data & API" => "fa-solid fa-database",
        "Productivity & Organization" => "fa-solid fa-list-check",
        "Finance & Calculators" => "fa-solid fa-sack-dollar",
        "Text & Content" => "fa-solid fa-file-alt",
        "Fun" => "fa-solid fa-face-laugh-beam",
        "Creative" => "fa-solid fa-palette",
        "Developer Tools" => "fa-solid fa-code",
        "Utilities" => "fa-solid fa-screwdriver-wrench",
        "Uncategorized" => "fa-solid fa-shapes",
        _ => FALLBACK_ICON,
    }
}
