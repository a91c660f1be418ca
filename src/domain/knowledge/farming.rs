//! Static farming strategy tables, keyed in lookup order

use super::FarmingStrategy;

macro_rules! card_advice {
    () => {
        "Use Divination scarabs and spec into Divination Card nodes on Atlas Passive Tree. Apply \"Area contains additional Divination Cards\" sextant."
    };
}

pub(super) const SCARAB_STRATEGIES: &[(&str, FarmingStrategy)] = &[
    ("Cartography", FarmingStrategy {
        method: "Atlas Passive Tree + Map Farming",
        locations: &["Maps with Cartography Scarab passives"],
        strategy: "Spec into Cartography Scarab nodes on Atlas Passive Tree. Run maps with \"Additional Cartographer's Strongboxes\" sextant. Use Ambush scarabs to increase strongbox quantity.",
    }),
    ("Reliquary", FarmingStrategy {
        method: "Heist Blueprint Farming",
        locations: &["Heist Blueprints", "Smuggler's Caches"],
        strategy: "Run Heist Blueprints with Unusual Gems or Replicas. Focus on Smuggler's Caches in maps. Spec into Heist nodes on Atlas Passive Tree.",
    }),
    ("Bestiary", FarmingStrategy {
        method: "Einhar Mission Farming",
        locations: &["Maps with Einhar missions"],
        strategy: "Spec into Bestiary nodes on Atlas Passive Tree. Use Einhar master missions on high-tier maps. Use sextants with \"Area contains additional Bestiary monsters\".",
    }),
    ("Harbinger", FarmingStrategy {
        method: "Harbinger Farming",
        locations: &["Maps with Harbinger passives"],
        strategy: "Spec into Harbinger nodes on Atlas Passive Tree. Use \"Area contains additional Harbingers\" sextant. Run maps with Harbinger scarabs.",
    }),
    ("Legion", FarmingStrategy {
        method: "Legion Farming",
        locations: &["Maps with Legion passives"],
        strategy: "Spec into Legion nodes on Atlas Passive Tree. Use \"Area contains additional Legion\" sextant. Run maps with Legion scarabs.",
    }),
    ("Breach", FarmingStrategy {
        method: "Breach Farming",
        locations: &["Maps with Breach passives"],
        strategy: "Spec into Breach nodes on Atlas Passive Tree. Use \"Area contains additional Breaches\" sextant. Run maps with Breach scarabs.",
    }),
    ("Expedition", FarmingStrategy {
        method: "Expedition Farming",
        locations: &["Maps with Expedition passives"],
        strategy: "Spec into Expedition nodes on Atlas Passive Tree. Use \"Area contains additional Expedition\" sextant. Run maps with Expedition scarabs.",
    }),
    ("Blight", FarmingStrategy {
        method: "Blight Farming",
        locations: &["Maps with Blight passives"],
        strategy: "Spec into Blight nodes on Atlas Passive Tree. Use \"Area contains additional Blight\" sextant. Run maps with Blight scarabs.",
    }),
    ("Metamorph", FarmingStrategy {
        method: "Metamorph Farming",
        locations: &["Maps with Metamorph passives"],
        strategy: "Spec into Metamorph nodes on Atlas Passive Tree. Use \"Area contains additional Metamorph samples\" sextant. Run maps with Metamorph scarabs.",
    }),
    ("Divination", FarmingStrategy {
        method: "Divination Card Farming",
        locations: &["Maps with Divination Card passives"],
        strategy: "Spec into Divination Card nodes on Atlas Passive Tree. Use \"Area contains additional Divination Cards\" sextant. Run maps with Divination scarabs.",
    }),
];

pub(super) const SCARAB_DEFAULT: FarmingStrategy = FarmingStrategy {
    method: "General Scarab Farming",
    locations: &["Delirium Maps", "Blight Maps", "Legion Encounters"],
    strategy: "Run high-tier maps with Delirium Orbs. Focus on Legion, Blight, and Metamorph encounters. Spec into Scarab nodes on Atlas Passive Tree.",
};

// Matched by substring, first hit wins
pub(super) const FRAGMENT_STRATEGIES: &[(&str, FarmingStrategy)] = &[
    ("Maven's Invitation", FarmingStrategy {
        method: "Maven Witness Farming",
        locations: &["Maps witnessed by Maven"],
        strategy: "Run maps with Maven witness active. Focus on completing 10 different maps in a region to spawn Maven's Invitation. Spec into Maven nodes on Atlas Passive Tree.",
    }),
    ("Forgotten", FarmingStrategy {
        method: "Shaper Guardian Maps",
        locations: &["Shaper Guardian Maps"],
        strategy: "Run Shaper Guardian Maps (Chimera, Hydra, Minotaur, Phoenix). Use \"Area contains additional Shaper Guardian\" sextant. Spec into Shaper nodes on Atlas Passive Tree.",
    }),
    ("Formed", FarmingStrategy {
        method: "Elder Guardian Maps",
        locations: &["Elder Guardian Maps"],
        strategy: "Run Elder Guardian Maps. Use \"Area contains additional Elder Guardian\" sextant. Spec into Elder nodes on Atlas Passive Tree.",
    }),
    ("Twisted", FarmingStrategy {
        method: "Breachlord Domains",
        locations: &["Breach Domains"],
        strategy: "Run Breach Domains (Chayula, Uul-Netol, Tul, Esh, Xoph). Spec into Breach nodes on Atlas Passive Tree. Use Breach scarabs.",
    }),
    ("Mortal", FarmingStrategy {
        method: "Atziri Farming",
        locations: &["Vaal Side Areas", "Sacrifice Fragments"],
        strategy: "Run Vaal Side Areas in maps. Use Sacrifice fragments in map device to spawn Vaal areas. Run normal Atziri to get Mortal fragments.",
    }),
    ("Sacrifice", FarmingStrategy {
        method: "Vaal Side Area Farming",
        locations: &["Vaal Side Areas"],
        strategy: "Run maps with \"Area contains Vaal Side Areas\" sextant. Use Vaal Fragments in map device to spawn additional Vaal Side Areas.",
    }),
    ("Simulacrum", FarmingStrategy {
        method: "Delirium Mirror Farming",
        locations: &["Maps with Delirium passives"],
        strategy: "Spec into Delirium nodes on Atlas Passive Tree. Use Delirium Orbs on maps. Run maps with Delirium scarabs.",
    }),
    ("Timeless", FarmingStrategy {
        method: "Legion Farming",
        locations: &["Maps with Legion passives"],
        strategy: "Spec into Legion nodes on Atlas Passive Tree. Use \"Area contains additional Legion\" sextant. Run maps with Legion scarabs.",
    }),
];

pub(super) const FRAGMENT_DEFAULT: FarmingStrategy = FarmingStrategy {
    method: "General Fragment Farming",
    locations: &["High-tier Maps", "Boss Encounters"],
    strategy: "Run high-tier maps with boss-focused Atlas Passive Tree. Focus on completing Maven invitations and endgame boss encounters.",
};

pub(super) const OIL_STRATEGY: FarmingStrategy = FarmingStrategy {
    method: "Blight Farming",
    locations: &["Blight Maps", "Blight Encounters"],
    strategy: "Run Blight Maps with at least 3 Teal Oils applied. Spec into Blight nodes on Atlas Passive Tree. Use Blight scarabs on high-tier maps. Focus on completing Blight Ravaged Maps for higher tier oil drops.",
};

const fn card(locations: &'static [&'static str], strategy: &'static str) -> FarmingStrategy {
    FarmingStrategy {
        method: "Targeted Map Farming",
        locations,
        strategy,
    }
}

pub(super) const CARD_STRATEGIES: &[(&str, FarmingStrategy)] = &[
    ("The Doctor", card(
        &["Burial Chambers", "Spider Forest"],
        concat!("Farm Burial Chambers or Spider Forest maps. ", card_advice!()),
    )),
    ("The Nurse", card(&["Tower Map"], concat!("Farm Tower maps. ", card_advice!()))),
    ("The Fiend", card(
        &["Putrid Cloister"],
        "Farm Putrid Cloister unique maps. Use Divination scarabs and spec into Divination Card nodes on Atlas Passive Tree.",
    )),
    ("House of Mirrors", card(
        &["The Mirror of Kalandra (Reflection of Kalandra)"],
        "Farm Reflection of Kalandra endgame content. This card is extremely rare and not target-farmable in a specific map.",
    )),
    ("The Demon", card(
        &["Uber Maven", "Uber Elder"],
        "Farm Uber Maven and Uber Elder encounters. Spec into Maven and Elder nodes on Atlas Passive Tree.",
    )),
    ("The Immortal", card(
        &["Hall of Grandmasters"],
        "Farm Hall of Grandmasters unique map. Use Divination scarabs and spec into Divination Card nodes on Atlas Passive Tree.",
    )),
    ("The Iron Bard", card(&["Conservatory Map"], concat!("Farm Conservatory maps. ", card_advice!()))),
    ("The Apothecary", card(&["Crimson Temple"], concat!("Farm Crimson Temple maps. ", card_advice!()))),
    ("Unrequited Love", card(&["Terrace Map"], concat!("Farm Terrace maps. ", card_advice!()))),
    ("The Enlightened", card(&["Scriptorium Map"], concat!("Farm Scriptorium maps. ", card_advice!()))),
    ("The Sephirot", card(&["Excavation Map"], concat!("Farm Excavation maps. ", card_advice!()))),
    ("Seven Years Bad Luck", card(&["Laboratory Map"], concat!("Farm Laboratory maps. ", card_advice!()))),
    ("The Hoarder", card(
        &["Arcade Map", "Burial Chambers Map"],
        concat!("Farm Arcade or Burial Chambers maps. ", card_advice!()),
    )),
    ("The Saint's Treasure", card(&["Arcade Map"], concat!("Farm Arcade maps. ", card_advice!()))),
    ("Abandoned Wealth", card(&["Arsenal Map", "Atoll Map"], concat!("Farm Arsenal or Atoll maps. ", card_advice!()))),
];

pub(super) const CARD_DEFAULT: FarmingStrategy = FarmingStrategy {
    method: "Targeted Map Farming",
    locations: &["Any Map with Divination Card focus"],
    strategy: "Spec into Divination Card nodes on Atlas Passive Tree. Use Divination scarabs on high-tier maps. Apply \"Area contains additional Divination Cards\" sextant. Check PoE Wiki for specific drop locations for this card.",
};
