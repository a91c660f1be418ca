//! Fixed crafting method catalogue

use super::CraftingMethod;

pub(super) const CRAFTING_METHODS: &[CraftingMethod] = &[
    CraftingMethod {
        name: "Cluster Jewel Crafting",
        description: "Crafting high-demand cluster jewels with specific notables",
        materials: &["Large Cluster Jewel (8 passives)", "Chaos Orbs", "Alteration Orbs", "Regal Orbs"],
        strategy: "Buy 8-passive Large Cluster Jewels with good bases (e.g., Critical, Elemental Damage). Use Alteration+Regal or Chaos spam to hit valuable notable combinations. Focus on meta builds for best returns.",
        estimated_cost: 150.0,
        estimated_return: 300.0,
        base_score: 85.0,
    },
    CraftingMethod {
        name: "Essence Crafting",
        description: "Using high-tier essences to craft meta items",
        materials: &["Deafening Essence of Dread/Anger/Hatred/Wrath", "Influenced item bases"],
        strategy: "Buy influenced item bases (e.g., Fingerless Silk Gloves, Two-Toned Boots). Apply Deafening Essences to guarantee one mod and hope for good influenced mods. Focus on meta builds for best returns.",
        estimated_cost: 200.0,
        estimated_return: 350.0,
        base_score: 75.0,
    },
    CraftingMethod {
        name: "Fossil Crafting",
        description: "Using specific fossil combinations to target valuable mod pools",
        materials: &["Pristine Fossils", "Jagged Fossils", "Dense Fossils", "Resonators"],
        strategy: "Buy good item bases (e.g., Astral Plate, Vaal Regalia). Use fossil combinations to target specific mod pools. For example, Pristine+Jagged+Dense for physical damage reduction and life on armor.",
        estimated_cost: 250.0,
        estimated_return: 500.0,
        base_score: 90.0,
    },
    CraftingMethod {
        name: "Harvest Reforge Crafting",
        description: "Using Harvest reforge crafts to target specific mod types",
        materials: &["Base items", "Harvest crafts (reforge with X)"],
        strategy: "Buy good item bases. Use Harvest reforge crafts to target specific mod types (e.g., \"Reforge with Physical modifiers\" on weapons). Combine with metamods for more deterministic results.",
        estimated_cost: 300.0,
        estimated_return: 600.0,
        base_score: 95.0,
    },
    CraftingMethod {
        name: "Eldritch Currency Crafting",
        description: "Using Eldritch currency to craft powerful implicit modifiers",
        materials: &["Eldritch Chaos Orbs", "Eldritch Exalted Orbs", "Gloves/Boots/Helmets/Body Armour"],
        strategy: "Buy item bases with good explicit modifiers. Apply Eldritch currency to add powerful implicit modifiers. Focus on meta combinations like spell suppression, elemental damage, or life regeneration.",
        estimated_cost: 400.0,
        estimated_return: 700.0,
        base_score: 80.0,
    },
    CraftingMethod {
        name: "Fractured Item Crafting",
        description: "Crafting on items with valuable fractured mods",
        materials: &["Items with good fractured mods", "Essences", "Fossils"],
        strategy: "Buy items with valuable fractured mods (e.g., T1 life, high physical damage). Craft using essences or fossils to add complementary mods. The fractured mod cannot be changed, providing a guaranteed high-tier mod.",
        estimated_cost: 500.0,
        estimated_return: 1000.0,
        base_score: 100.0,
    },
    CraftingMethod {
        name: "Veiled Chaos Orb Crafting",
        description: "Using Veiled Chaos Orbs to get powerful veiled modifiers",
        materials: &["Veiled Chaos Orbs", "Influenced item bases"],
        strategy: "Buy influenced item bases. Apply Veiled Chaos Orbs to reroll the item with a guaranteed veiled modifier. Unveil to select powerful mods like \"Trigger a Socketed Spell when you Use a Skill\".",
        estimated_cost: 150.0,
        estimated_return: 300.0,
        base_score: 70.0,
    },
    CraftingMethod {
        name: "Awakener Orb Crafting",
        description: "Combining two influenced items to create a double-influenced item",
        materials: &["Awakener's Orb", "Two influenced items with desired mods"],
        strategy: "Buy two influenced items with desired mods (e.g., item with T1 life and item with explode mod). Use Awakener's Orb to destroy the first item and transfer its influence mod to the second item. Results in a double-influenced item with both mods.",
        estimated_cost: 1000.0,
        estimated_return: 2000.0,
        base_score: 95.0,
    },
    CraftingMethod {
        name: "Recombinator Crafting",
        description: "Using recombinators to merge mods from two items",
        materials: &["Recombinators", "Two well-rolled items"],
        strategy: "Buy or craft two items with complementary mods. Use recombinators to merge them, with a chance to get both sets of mods on a single item. Can create otherwise impossible mod combinations.",
        estimated_cost: 300.0,
        estimated_return: 800.0,
        base_score: 85.0,
    },
    CraftingMethod {
        name: "Meta-mod Crafting",
        description: "Using \"Prefixes/Suffixes Cannot Be Changed\" with other crafting methods",
        materials: &["Exalted Orbs", "Divine Orbs", "Crafting bench (2 ex for metamod)"],
        strategy: "Craft an item with good prefixes or suffixes. Apply \"Prefixes/Suffixes Cannot Be Changed\" metamod. Use Harvest reforge, Veiled Chaos Orbs, or other methods to safely modify the other half of the item without risking the good mods.",
        estimated_cost: 800.0,
        estimated_return: 1500.0,
        base_score: 90.0,
    },
];
