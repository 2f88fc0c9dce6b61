//! Block values and protocol item/block identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Protocol item or block identifier.
///
/// Ids below 256 name placeable blocks, higher ids name items. The server may
/// send ids this client does not know, so this is an open newtype rather than
/// a closed enum; [`ItemType::name`] returns `None` for unknown ids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemType(pub i16);

macro_rules! item_types {
    ($($konst:ident = $id:literal => $label:literal,)*) => {
        impl ItemType {
            $(
                #[doc = concat!("`", $label, "` (id ", stringify!($id), ").")]
                pub const $konst: ItemType = ItemType($id);
            )*

            /// Human-readable name, or `None` for ids this client does not know.
            pub fn name(self) -> Option<&'static str> {
                match self.0 {
                    $($id => Some($label),)*
                    _ => None,
                }
            }
        }
    };
}

item_types! {
    NO_ITEM = -1 => "no item",
    AIR = 0 => "air",
    STONE = 1 => "stone",
    GRASS = 2 => "grass",
    DIRT = 3 => "dirt",
    COBBLESTONE = 4 => "cobblestone",
    WOODEN_PLANK = 5 => "wooden plank",
    SAPLING = 6 => "sapling",
    BEDROCK = 7 => "bedrock",
    WATER = 8 => "water",
    STATIONARY_WATER = 9 => "stationary water",
    LAVA = 10 => "lava",
    STATIONARY_LAVA = 11 => "stationary lava",
    SAND = 12 => "sand",
    GRAVEL = 13 => "gravel",
    GOLD_ORE = 14 => "gold ore",
    IRON_ORE = 15 => "iron ore",
    COAL_ORE = 16 => "coal ore",
    WOOD = 17 => "wood",
    LEAVES = 18 => "leaves",
    SPONGE = 19 => "sponge",
    GLASS = 20 => "glass",
    LAPIS_LAZULI_ORE = 21 => "lapis lazuli ore",
    LAPIS_LAZULI_BLOCK = 22 => "lapis lazuli block",
    DISPENSER = 23 => "dispenser",
    SANDSTONE = 24 => "sandstone",
    NOTE_BLOCK = 25 => "note block",
    WOOL = 35 => "wool",
    YELLOW_FLOWER = 37 => "yellow flower",
    RED_ROSE = 38 => "red rose",
    BROWN_MUSHROOM = 39 => "brown mushroom",
    RED_MUSHROOM = 40 => "red mushroom",
    GOLD_BLOCK = 41 => "gold block",
    IRON_BLOCK = 42 => "iron block",
    DOUBLE_STONE_SLAB = 43 => "double stone slab",
    STONE_SLAB = 44 => "stone slab",
    BRICK = 45 => "brick",
    TNT = 46 => "tnt",
    BOOKSHELF = 47 => "bookshelf",
    MOSS_STONE = 48 => "moss stone",
    OBSIDIAN = 49 => "obsidian",
    TORCH = 50 => "torch",
    FIRE = 51 => "fire",
    MONSTER_SPAWNER = 52 => "monster spawner",
    WOODEN_STAIRS = 53 => "wooden stairs",
    CHEST = 54 => "chest",
    REDSTONE_WIRE_PLACED = 55 => "redstone wire (placed)",
    DIAMOND_ORE = 56 => "diamond ore",
    DIAMOND_BLOCK = 57 => "diamond block",
    WORKBENCH = 58 => "workbench",
    CROPS = 59 => "crops",
    FARMLAND = 60 => "farmland",
    FURNACE = 61 => "furnace",
    BURNING_FURNACE = 62 => "burning furnace",
    SIGN_POST_PLACED = 63 => "sign post (placed)",
    WOODEN_DOOR_PLACED = 64 => "wooden door (placed)",
    LADDER = 65 => "ladder",
    MINECART_TRACKS = 66 => "minecart tracks",
    COBBLESTONE_STAIRS = 67 => "cobblestone stairs",
    WALL_SIGN_PLACED = 68 => "wall sign (placed)",
    LEVER = 69 => "lever",
    STONE_PRESSURE_PLATE = 70 => "stone pressure plate",
    IRON_DOOR_PLACED = 71 => "iron door (placed)",
    WOODEN_PRESSURE_PLATE = 72 => "wooden pressure plate",
    REDSTONE_ORE = 73 => "redstone ore",
    GLOWING_REDSTONE_ORE = 74 => "glowing redstone ore",
    REDSTONE_TORCH_OFF_PLACED = 75 => "redstone torch off (placed)",
    REDSTONE_TORCH_ON = 76 => "redstone torch on",
    STONE_BUTTON = 77 => "stone button",
    SNOW = 78 => "snow",
    ICE = 79 => "ice",
    SNOW_BLOCK = 80 => "snow block",
    CACTUS = 81 => "cactus",
    CLAY = 82 => "clay",
    SUGAR_CANE_PLACED = 83 => "sugar cane (placed)",
    JUKEBOX = 84 => "jukebox",
    FENCE = 85 => "fence",
    PUMPKIN = 86 => "pumpkin",
    NETHERRACK = 87 => "netherrack",
    SOUL_SAND = 88 => "soul sand",
    GLOWSTONE = 89 => "glowstone",
    PORTAL = 90 => "portal",
    JACK_O_LANTERN = 91 => "jack-o-lantern",
    CAKE_BLOCK = 92 => "cake block",
    IRON_SHOVEL = 256 => "iron shovel",
    IRON_PICKAXE = 257 => "iron pickaxe",
    IRON_AXE = 258 => "iron axe",
    FLINT_AND_STEEL = 259 => "flint and steel",
    APPLE = 260 => "apple",
    BOW = 261 => "bow",
    ARROW = 262 => "arrow",
    COAL = 263 => "coal",
    DIAMOND = 264 => "diamond",
    IRON_INGOT = 265 => "iron ingot",
    GOLD_INGOT = 266 => "gold ingot",
    IRON_SWORD = 267 => "iron sword",
    WOODEN_SWORD = 268 => "wooden sword",
    WOODEN_SHOVEL = 269 => "wooden shovel",
    WOODEN_PICKAXE = 270 => "wooden pickaxe",
    WOODEN_AXE = 271 => "wooden axe",
    STONE_SWORD = 272 => "stone sword",
    STONE_SHOVEL = 273 => "stone shovel",
    STONE_PICKAXE = 274 => "stone pickaxe",
    STONE_AXE = 275 => "stone axe",
    DIAMOND_SWORD = 276 => "diamond sword",
    DIAMOND_SHOVEL = 277 => "diamond shovel",
    DIAMOND_PICKAXE = 278 => "diamond pickaxe",
    DIAMOND_AXE = 279 => "diamond axe",
    STICK = 280 => "stick",
    BOWL = 281 => "bowl",
    MUSHROOM_SOUP = 282 => "mushroom soup",
    GOLD_SWORD = 283 => "gold sword",
    GOLD_SHOVEL = 284 => "gold shovel",
    GOLD_PICKAXE = 285 => "gold pickaxe",
    GOLD_AXE = 286 => "gold axe",
    STRING = 287 => "string",
    FEATHER = 288 => "feather",
    SULPHUR = 289 => "sulphur",
    WOODEN_HOE = 290 => "wooden hoe",
    STONE_HOE = 291 => "stone hoe",
    IRON_HOE = 292 => "iron hoe",
    DIAMOND_HOE = 293 => "diamond hoe",
    GOLD_HOE = 294 => "gold hoe",
    SEEDS = 295 => "seeds",
    WHEAT = 296 => "wheat",
    BREAD = 297 => "bread",
    LEATHER_HELMET = 298 => "leather helmet",
    LEATHER_CHESTPLATE = 299 => "leather chestplate",
    LEATHER_LEGGINGS = 300 => "leather leggings",
    LEATHER_BOOTS = 301 => "leather boots",
    CHAINMAIL_HELMET = 302 => "chainmail helmet",
    CHAINMAIL_CHESTPLATE = 303 => "chainmail chestplate",
    CHAINMAIL_LEGGINGS = 304 => "chainmail leggings",
    CHAINMAIL_BOOTS = 305 => "chainmail boots",
    IRON_HELMET = 306 => "iron helmet",
    IRON_CHESTPLATE = 307 => "iron chestplate",
    IRON_LEGGINGS = 308 => "iron leggings",
    IRON_BOOTS = 309 => "iron boots",
    DIAMOND_HELMET = 310 => "diamond helmet",
    DIAMOND_CHESTPLATE = 311 => "diamond chestplate",
    DIAMOND_LEGGINGS = 312 => "diamond leggings",
    DIAMOND_BOOTS = 313 => "diamond boots",
    GOLD_HELMET = 314 => "gold helmet",
    GOLD_CHESTPLATE = 315 => "gold chestplate",
    GOLD_LEGGINGS = 316 => "gold leggings",
    GOLD_BOOTS = 317 => "gold boots",
    FLINT = 318 => "flint",
    RAW_PORKCHOP = 319 => "raw porkchop",
    COOKED_PORKCHOP = 320 => "cooked porkchop",
    PAINTINGS = 321 => "paintings",
    GOLDEN_APPLE = 322 => "golden apple",
    SIGN = 323 => "sign",
    WOODEN_DOOR = 324 => "wooden door",
    BUCKET = 325 => "bucket",
    WATER_BUCKET = 326 => "water bucket",
    LAVA_BUCKET = 327 => "lava bucket",
    MINECART = 328 => "minecart",
    SADDLE = 329 => "saddle",
    IRON_DOOR = 330 => "iron door",
    REDSTONE = 331 => "redstone",
    SNOWBALL = 332 => "snowball",
    BOAT = 333 => "boat",
    LEATHER = 334 => "leather",
    MILK = 335 => "milk",
    CLAY_BRICK = 336 => "clay brick",
    CLAY_BALLS = 337 => "clay balls",
    SUGAR_CANE = 338 => "sugar cane",
    PAPER = 339 => "paper",
    BOOK = 340 => "book",
    SLIMEBALL = 341 => "slimeball",
    STORAGE_MINECART = 342 => "storage minecart",
    POWERED_MINECART = 343 => "powered minecart",
    EGG = 344 => "egg",
    COMPASS = 345 => "compass",
    FISHING_ROD = 346 => "fishing rod",
    CLOCK = 347 => "clock",
    GLOWSTONE_DUST = 348 => "glowstone dust",
    RAW_FISH = 349 => "raw fish",
    COOKED_FISH = 350 => "cooked fish",
    INK_SAC = 351 => "ink sac",
    BONE = 352 => "bone",
    SUGAR = 353 => "sugar",
    CAKE = 354 => "cake",
    GOLD_MUSIC_DISC = 2256 => "gold music disc",
    GREEN_MUSIC_DISC = 2257 => "green music disc",
}

impl ItemType {
    /// Returns `true` for ids in the placeable-block range.
    pub fn is_block(self) -> bool {
        (0..256).contains(&self.0)
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{name}"),
            None => write!(f, "unknown item {}", self.0),
        }
    }
}

/// A single voxel: its type plus the per-block nibbles the server streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    /// Block type.
    pub item: ItemType,
    /// Orientation / damage / growth data, meaning depends on the type.
    pub metadata: u8,
    /// Block light level (0–15).
    pub light: u8,
    /// Sky light level (0–15).
    pub sky_light: u8,
}

impl Block {
    /// Empty space. Unloaded regions also read as this value.
    pub const AIR: Block = Block::new(ItemType::AIR, 0, 0, 0);

    /// Creates a block with explicit metadata and light values.
    pub const fn new(item: ItemType, metadata: u8, light: u8, sky_light: u8) -> Self {
        Self {
            item,
            metadata,
            light,
            sky_light,
        }
    }

    /// Creates a block of the given type with zeroed metadata and light.
    pub const fn of(item: ItemType) -> Self {
        Self::new(item, 0, 0, 0)
    }

    /// Returns `true` if this block's type is air (metadata is ignored).
    pub fn is_air(&self) -> bool {
        self.item == ItemType::AIR
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::AIR
    }
}
