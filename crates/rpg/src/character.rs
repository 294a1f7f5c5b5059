//! The player character record and its derived statistics.

use std::fmt;

use painel_core::geometry::Rgb;
use serde::{Deserialize, Serialize};

/// Nominal range of each primary attribute.
pub const ATTRIBUTE_MIN: i32 = 1;
pub const ATTRIBUTE_MAX: i32 = 20;

/// Attribute total every character may spend before skill points.
pub const BASE_ATTRIBUTE_POOL: i32 = 60;

pub const SKIN_COLORS: [Rgb; 8] = [
    Rgb::new(255, 213, 170),
    Rgb::new(210, 180, 140),
    Rgb::new(170, 140, 110),
    Rgb::new(140, 100, 70),
    Rgb::new(90, 60, 40),
    Rgb::new(240, 190, 150),
    Rgb::new(200, 160, 120),
    Rgb::new(160, 120, 90),
];

pub const HAIR_COLORS: [Rgb; 9] = [
    Rgb::new(50, 50, 50),
    Rgb::new(139, 69, 19),
    Rgb::new(222, 184, 135),
    Rgb::new(255, 215, 0),
    Rgb::new(165, 42, 42),
    Rgb::new(128, 0, 128),
    Rgb::new(255, 140, 0),
    Rgb::new(70, 130, 180),
    Rgb::new(255, 20, 147),
];

pub const EYE_COLORS: [Rgb; 8] = [
    Rgb::new(70, 130, 180),
    Rgb::new(34, 139, 34),
    Rgb::new(139, 69, 19),
    Rgb::new(128, 0, 128),
    Rgb::new(255, 140, 0),
    Rgb::new(220, 20, 60),
    Rgb::new(0, 128, 128),
    Rgb::new(105, 105, 105),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    #[default]
    Warrior,
    Mage,
    Archer,
    Rogue,
}

impl CharacterClass {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Warrior => "warrior",
            Self::Mage => "mage",
            Self::Archer => "archer",
            Self::Rogue => "rogue",
        }
    }

    /// Capitalised name for display.
    pub fn title(self) -> &'static str {
        match self {
            Self::Warrior => "Warrior",
            Self::Mage => "Mage",
            Self::Archer => "Archer",
            Self::Rogue => "Rogue",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponType {
    #[default]
    Sword,
    Staff,
    Bow,
}

/// Hair style index: 0 short, 1 long, 2 spiky.
pub const HAIR_STYLE_COUNT: u8 = 3;

/// One of the six primary attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Strength,
    Intelligence,
    Agility,
    Charisma,
    Vitality,
    Luck,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Self::Strength,
        Self::Intelligence,
        Self::Agility,
        Self::Charisma,
        Self::Vitality,
        Self::Luck,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Intelligence => "Intelligence",
            Self::Agility => "Agility",
            Self::Charisma => "Charisma",
            Self::Vitality => "Vitality",
            Self::Luck => "Luck",
        }
    }
}

/// Which appearance palette a customisation button cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Palette {
    Skin,
    Hair,
    Eyes,
}

impl Palette {
    pub fn colors(self) -> &'static [Rgb] {
        match self {
            Self::Skin => &SKIN_COLORS,
            Self::Hair => &HAIR_COLORS,
            Self::Eyes => &EYE_COLORS,
        }
    }
}

/// Stored character. Derived values (max health/mana, attack/magic power)
/// are computed on every call and never persisted.
///
/// Missing fields in stored JSON fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    pub name: String,
    pub class_type: CharacterClass,
    pub level: i32,
    pub experience: i32,

    pub strength: i32,
    pub intelligence: i32,
    pub agility: i32,
    pub charisma: i32,
    pub vitality: i32,
    pub luck: i32,

    pub health: i32,
    pub mana: i32,

    pub skin_color: Rgb,
    pub hair_color: Rgb,
    pub hair_style: u8,
    pub eye_color: Rgb,

    pub armor_color: Rgb,
    pub weapon_type: WeaponType,
    pub accessory: String,

    pub skill_points: i32,
    pub gold: i32,
}

impl Default for Character {
    fn default() -> Self {
        Self {
            name: "Hero".to_string(),
            class_type: CharacterClass::Warrior,
            level: 1,
            experience: 0,
            strength: 10,
            intelligence: 10,
            agility: 10,
            charisma: 10,
            vitality: 10,
            luck: 10,
            health: 100,
            mana: 50,
            skin_color: Rgb::new(255, 213, 170),
            hair_color: Rgb::new(139, 69, 19),
            hair_style: 0,
            eye_color: Rgb::new(70, 130, 180),
            armor_color: Rgb::new(100, 100, 100),
            weapon_type: WeaponType::Sword,
            accessory: "none".to_string(),
            skill_points: 5,
            gold: 100,
        }
    }
}

impl Character {
    /// A fresh default character named after its owner.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn max_health(&self) -> i32 {
        80 + self.vitality * 8 + self.level * 5
    }

    pub fn max_mana(&self) -> i32 {
        30 + self.intelligence * 5 + self.level * 3
    }

    pub fn attack_power(&self) -> i32 {
        self.strength + self.level * 2
    }

    pub fn magic_power(&self) -> i32 {
        self.intelligence + self.level * 2
    }

    /// Whether current health or mana sit above their computed maxima.
    /// Neither is clamped; lowering an attribute can produce this state.
    pub fn exceeds_maxima(&self) -> bool {
        self.health > self.max_health() || self.mana > self.max_mana()
    }

    pub fn attribute(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Intelligence => self.intelligence,
            Attribute::Agility => self.agility,
            Attribute::Charisma => self.charisma,
            Attribute::Vitality => self.vitality,
            Attribute::Luck => self.luck,
        }
    }

    pub fn set_attribute(&mut self, attribute: Attribute, value: i32) {
        let slot = match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Intelligence => &mut self.intelligence,
            Attribute::Agility => &mut self.agility,
            Attribute::Charisma => &mut self.charisma,
            Attribute::Vitality => &mut self.vitality,
            Attribute::Luck => &mut self.luck,
        };
        *slot = value;
    }

    pub fn attribute_total(&self) -> i32 {
        Attribute::ALL.iter().map(|a| self.attribute(*a)).sum()
    }

    /// Points left to distribute; negative when over budget.
    pub fn remaining_skill_points(&self) -> i32 {
        BASE_ATTRIBUTE_POOL + self.skill_points - self.attribute_total()
    }

    pub fn color(&self, palette: Palette) -> Rgb {
        match palette {
            Palette::Skin => self.skin_color,
            Palette::Hair => self.hair_color,
            Palette::Eyes => self.eye_color,
        }
    }

    /// Step the colour of `palette` one entry forward (`step > 0`) or back,
    /// wrapping around. A colour that is not in the palette restarts from
    /// the palette's first entry.
    pub fn cycle_color(&mut self, palette: Palette, step: isize) {
        let colors = palette.colors();
        let next = match colors.iter().position(|c| *c == self.color(palette)) {
            Some(index) => {
                let len = colors.len() as isize;
                colors[(index as isize + step).rem_euclid(len) as usize]
            }
            None => colors[0],
        };
        match palette {
            Palette::Skin => self.skin_color = next,
            Palette::Hair => self.hair_color = next,
            Palette::Eyes => self.eye_color = next,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_max_health_is_165() {
        let c = Character::default();
        assert_eq!(c.max_health(), 80 + 80 + 5);
        assert_eq!(c.max_health(), 165);
        assert_eq!(c.max_mana(), 30 + 50 + 3);
        assert_eq!(c.attack_power(), 12);
        assert_eq!(c.magic_power(), 12);
    }

    #[test]
    fn max_health_strictly_increases_with_vitality_and_level() {
        for vitality in 1..20 {
            for level in 1..50 {
                let c = Character {
                    vitality,
                    level,
                    ..Character::default()
                };
                let more_vit = Character {
                    vitality: vitality + 1,
                    ..c.clone()
                };
                let more_lvl = Character {
                    level: level + 1,
                    ..c.clone()
                };
                assert!(more_vit.max_health() > c.max_health());
                assert!(more_lvl.max_health() > c.max_health());
            }
        }
    }

    #[test]
    fn remaining_points_can_go_negative() {
        let mut c = Character::default();
        assert_eq!(c.remaining_skill_points(), 5);
        c.set_attribute(Attribute::Strength, 20);
        assert_eq!(c.remaining_skill_points(), -5);
    }

    #[test]
    fn cycling_wraps_both_ways() {
        let mut c = Character::default();
        assert_eq!(c.skin_color, SKIN_COLORS[0]);
        c.cycle_color(Palette::Skin, -1);
        assert_eq!(c.skin_color, SKIN_COLORS[7]);
        c.cycle_color(Palette::Skin, 1);
        assert_eq!(c.skin_color, SKIN_COLORS[0]);

        // Default hair is the palette's second entry.
        c.cycle_color(Palette::Hair, 1);
        assert_eq!(c.hair_color, HAIR_COLORS[2]);
    }

    #[test]
    fn unknown_colour_restarts_palette() {
        let mut c = Character {
            eye_color: Rgb::new(1, 2, 3),
            ..Character::default()
        };
        c.cycle_color(Palette::Eyes, 1);
        assert_eq!(c.eye_color, EYE_COLORS[0]);
    }

    #[test]
    fn lowered_vitality_leaves_health_above_max() {
        let mut c = Character {
            health: 165,
            ..Character::default()
        };
        assert!(!c.exceeds_maxima());
        c.set_attribute(Attribute::Vitality, 1);
        assert!(c.exceeds_maxima());
        assert_eq!(c.health, 165);
    }

    #[test]
    fn serializes_with_flat_field_names_and_colour_arrays() {
        let json = serde_json::to_value(Character::named("ana")).unwrap();
        assert_eq!(json["name"], "ana");
        assert_eq!(json["class_type"], "warrior");
        assert_eq!(json["weapon_type"], "sword");
        assert_eq!(json["skin_color"], serde_json::json!([255, 213, 170]));
    }
}
