//! Maximum stack sizes per item type.
//!
//! The table is built once at startup with [`ItemStackTable::standard`] and
//! shared read-only (typically behind an `Arc`). Stack height is advisory
//! metadata, so unknown types answer [`UNKNOWN_STACK_HEIGHT`] instead of failing.

use rustc_hash::FxHashMap;

use crate::block::ItemType;

/// Returned by [`ItemStackTable::stack_height`] for types not in the table.
pub const UNKNOWN_STACK_HEIGHT: i32 = -1;

/// Stack heights for every type this protocol generation knows.
const STANDARD_STACK_HEIGHTS: &[(ItemType, i32)] = &[
    (ItemType::NO_ITEM, 0),
    (ItemType::AIR, 0),
    (ItemType::STONE, 64),
    (ItemType::GRASS, 64),
    (ItemType::DIRT, 64),
    (ItemType::COBBLESTONE, 64),
    (ItemType::WOODEN_PLANK, 64),
    (ItemType::SAPLING, 64),
    (ItemType::BEDROCK, 64),
    (ItemType::WATER, 64),
    (ItemType::STATIONARY_WATER, 64),
    (ItemType::LAVA, 64),
    (ItemType::STATIONARY_LAVA, 64),
    (ItemType::SAND, 64),
    (ItemType::GRAVEL, 64),
    (ItemType::GOLD_ORE, 64),
    (ItemType::IRON_ORE, 64),
    (ItemType::COAL_ORE, 64),
    (ItemType::WOOD, 64),
    (ItemType::LEAVES, 64),
    (ItemType::SPONGE, 64),
    (ItemType::GLASS, 64),
    (ItemType::LAPIS_LAZULI_ORE, 64),
    (ItemType::LAPIS_LAZULI_BLOCK, 64),
    (ItemType::DISPENSER, 64),
    (ItemType::SANDSTONE, 64),
    (ItemType::NOTE_BLOCK, 64),
    (ItemType::WOOL, 64),
    (ItemType::YELLOW_FLOWER, 64),
    (ItemType::RED_ROSE, 64),
    (ItemType::BROWN_MUSHROOM, 64),
    (ItemType::RED_MUSHROOM, 64),
    (ItemType::GOLD_BLOCK, 64),
    (ItemType::IRON_BLOCK, 64),
    (ItemType::DOUBLE_STONE_SLAB, 64),
    (ItemType::STONE_SLAB, 64),
    (ItemType::BRICK, 64),
    (ItemType::TNT, 64),
    (ItemType::BOOKSHELF, 64),
    (ItemType::MOSS_STONE, 64),
    (ItemType::OBSIDIAN, 64),
    (ItemType::TORCH, 64),
    (ItemType::FIRE, 64),
    (ItemType::MONSTER_SPAWNER, 64),
    (ItemType::WOODEN_STAIRS, 64),
    (ItemType::CHEST, 64),
    (ItemType::REDSTONE_WIRE_PLACED, 64),
    (ItemType::DIAMOND_ORE, 64),
    (ItemType::DIAMOND_BLOCK, 64),
    (ItemType::WORKBENCH, 64),
    (ItemType::CROPS, 64),
    (ItemType::FARMLAND, 64),
    (ItemType::FURNACE, 64),
    (ItemType::BURNING_FURNACE, 64),
    (ItemType::SIGN_POST_PLACED, 1),
    (ItemType::WOODEN_DOOR_PLACED, 1),
    (ItemType::LADDER, 64),
    (ItemType::MINECART_TRACKS, 64),
    (ItemType::COBBLESTONE_STAIRS, 64),
    (ItemType::WALL_SIGN_PLACED, 1),
    (ItemType::LEVER, 64),
    (ItemType::STONE_PRESSURE_PLATE, 64),
    (ItemType::IRON_DOOR_PLACED, 1),
    (ItemType::WOODEN_PRESSURE_PLATE, 64),
    (ItemType::REDSTONE_ORE, 64),
    (ItemType::GLOWING_REDSTONE_ORE, 64),
    (ItemType::REDSTONE_TORCH_OFF_PLACED, 64),
    (ItemType::REDSTONE_TORCH_ON, 64),
    (ItemType::STONE_BUTTON, 64),
    (ItemType::SNOW, 64),
    (ItemType::ICE, 64),
    (ItemType::SNOW_BLOCK, 64),
    (ItemType::CACTUS, 64),
    (ItemType::CLAY, 64),
    (ItemType::SUGAR_CANE_PLACED, 64),
    (ItemType::JUKEBOX, 64),
    (ItemType::FENCE, 64),
    (ItemType::PUMPKIN, 64),
    (ItemType::NETHERRACK, 64),
    (ItemType::SOUL_SAND, 64),
    (ItemType::GLOWSTONE, 64),
    (ItemType::PORTAL, 0),
    (ItemType::JACK_O_LANTERN, 64),
    (ItemType::CAKE_BLOCK, 1),
    (ItemType::IRON_SHOVEL, 1),
    (ItemType::IRON_PICKAXE, 1),
    (ItemType::IRON_AXE, 1),
    (ItemType::FLINT_AND_STEEL, 1),
    (ItemType::APPLE, 1),
    (ItemType::BOW, 1),
    (ItemType::ARROW, 64),
    (ItemType::COAL, 64),
    (ItemType::DIAMOND, 64),
    (ItemType::IRON_INGOT, 64),
    (ItemType::GOLD_INGOT, 64),
    (ItemType::IRON_SWORD, 1),
    (ItemType::WOODEN_SWORD, 1),
    (ItemType::WOODEN_SHOVEL, 1),
    (ItemType::WOODEN_PICKAXE, 1),
    (ItemType::WOODEN_AXE, 1),
    (ItemType::STONE_SWORD, 1),
    (ItemType::STONE_SHOVEL, 1),
    (ItemType::STONE_PICKAXE, 1),
    (ItemType::STONE_AXE, 1),
    (ItemType::DIAMOND_SWORD, 1),
    (ItemType::DIAMOND_SHOVEL, 1),
    (ItemType::DIAMOND_PICKAXE, 1),
    (ItemType::DIAMOND_AXE, 1),
    (ItemType::STICK, 64),
    (ItemType::BOWL, 64),
    (ItemType::MUSHROOM_SOUP, 1),
    (ItemType::GOLD_SWORD, 1),
    (ItemType::GOLD_SHOVEL, 1),
    (ItemType::GOLD_PICKAXE, 1),
    (ItemType::GOLD_AXE, 1),
    (ItemType::STRING, 64),
    (ItemType::FEATHER, 64),
    (ItemType::SULPHUR, 64),
    (ItemType::WOODEN_HOE, 1),
    (ItemType::STONE_HOE, 1),
    (ItemType::IRON_HOE, 1),
    (ItemType::DIAMOND_HOE, 1),
    (ItemType::GOLD_HOE, 1),
    (ItemType::SEEDS, 64),
    (ItemType::WHEAT, 64),
    (ItemType::BREAD, 1),
    (ItemType::LEATHER_HELMET, 1),
    (ItemType::LEATHER_CHESTPLATE, 1),
    (ItemType::LEATHER_LEGGINGS, 1),
    (ItemType::LEATHER_BOOTS, 1),
    (ItemType::CHAINMAIL_HELMET, 1),
    (ItemType::CHAINMAIL_CHESTPLATE, 1),
    (ItemType::CHAINMAIL_LEGGINGS, 1),
    (ItemType::CHAINMAIL_BOOTS, 1),
    (ItemType::IRON_HELMET, 1),
    (ItemType::IRON_CHESTPLATE, 1),
    (ItemType::IRON_LEGGINGS, 1),
    (ItemType::IRON_BOOTS, 1),
    (ItemType::DIAMOND_HELMET, 1),
    (ItemType::DIAMOND_CHESTPLATE, 1),
    (ItemType::DIAMOND_LEGGINGS, 1),
    (ItemType::DIAMOND_BOOTS, 1),
    (ItemType::GOLD_HELMET, 1),
    (ItemType::GOLD_CHESTPLATE, 1),
    (ItemType::GOLD_LEGGINGS, 1),
    (ItemType::GOLD_BOOTS, 1),
    (ItemType::FLINT, 1),
    (ItemType::RAW_PORKCHOP, 1),
    (ItemType::COOKED_PORKCHOP, 1),
    (ItemType::PAINTINGS, 64),
    (ItemType::GOLDEN_APPLE, 1),
    (ItemType::SIGN, 1),
    (ItemType::WOODEN_DOOR, 1),
    (ItemType::BUCKET, 1),
    (ItemType::WATER_BUCKET, 1),
    (ItemType::LAVA_BUCKET, 1),
    (ItemType::MINECART, 1),
    (ItemType::SADDLE, 1),
    (ItemType::IRON_DOOR, 1),
    (ItemType::REDSTONE, 64),
    (ItemType::SNOWBALL, 16),
    (ItemType::BOAT, 1),
    (ItemType::LEATHER, 64),
    (ItemType::MILK, 1),
    (ItemType::CLAY_BRICK, 64),
    (ItemType::CLAY_BALLS, 64),
    (ItemType::SUGAR_CANE, 64),
    (ItemType::PAPER, 64),
    (ItemType::BOOK, 64),
    (ItemType::SLIMEBALL, 64),
    (ItemType::STORAGE_MINECART, 1),
    (ItemType::POWERED_MINECART, 1),
    (ItemType::EGG, 16),
    (ItemType::COMPASS, 64),
    (ItemType::FISHING_ROD, 64),
    (ItemType::CLOCK, 64),
    (ItemType::GLOWSTONE_DUST, 64),
    (ItemType::RAW_FISH, 1),
    (ItemType::COOKED_FISH, 1),
    (ItemType::INK_SAC, 64),
    (ItemType::BONE, 64),
    (ItemType::SUGAR, 64),
    (ItemType::CAKE, 1),
    (ItemType::GOLD_MUSIC_DISC, 1),
    (ItemType::GREEN_MUSIC_DISC, 1),
];

/// Read-only map from item type to maximum stack size.
#[derive(Debug, Clone)]
pub struct ItemStackTable {
    heights: FxHashMap<ItemType, i32>,
}

impl ItemStackTable {
    /// Builds the table for the protocol generation this client speaks.
    pub fn standard() -> Self {
        Self::from_entries(STANDARD_STACK_HEIGHTS.iter().copied())
    }

    /// Builds a table from explicit `(type, height)` pairs. Later pairs win.
    pub fn from_entries(entries: impl IntoIterator<Item = (ItemType, i32)>) -> Self {
        Self {
            heights: entries.into_iter().collect(),
        }
    }

    /// Maximum stack size for `item`, or [`UNKNOWN_STACK_HEIGHT`].
    pub fn stack_height(&self, item: ItemType) -> i32 {
        self.heights
            .get(&item)
            .copied()
            .unwrap_or(UNKNOWN_STACK_HEIGHT)
    }

    /// Number of types in the table.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }
}
