//! Identifier bindings generated from the sound project
//!
//! Generated by `ids_bindgen` from `Wwise_IDs.h`. Do not edit by hand;
//! regenerate after the sound project is rebuilt in the authoring tool.

#![allow(missing_docs)]
#![allow(clippy::unreadable_literal)]

use crate::{Binding, Category};

pub mod events {
    use crate::UniqueId;

    pub const PLAY_CELEBRATIONFANFARE: UniqueId = UniqueId::new(1257416293);
    pub const PLAY_DESERTAMBIANCE: UniqueId = UniqueId::new(3643602477);
    pub const PLAY_EXPLOSION: UniqueId = UniqueId::new(4030404899);
    pub const PLAY_GAMEINTROTRACK: UniqueId = UniqueId::new(2853397551);
    pub const PLAY_HELICOPTER_SOUND: UniqueId = UniqueId::new(3013451977);
    pub const PLAY_HELICOPTERMISSILE: UniqueId = UniqueId::new(2723016199);
    pub const PLAY_MAINMENUMUSIC: UniqueId = UniqueId::new(667425441);
    pub const PLAY_SOLIDER_GUNFIRE: UniqueId = UniqueId::new(1988800053);
    pub const PLAY_SOLIDERSCREAM: UniqueId = UniqueId::new(2568326629);
    pub const PLAY_TANK_GUNFIRE: UniqueId = UniqueId::new(3624895801);
}

pub mod states {
    pub mod soundeffectstates {
        use crate::UniqueId;

        pub const GROUP: UniqueId = UniqueId::new(1216687119);

        pub mod state {
            use crate::UniqueId;

            pub const NONE: UniqueId = UniqueId::new(748895195);
        }
    }
}

pub mod game_parameters {
    use crate::UniqueId;

    pub const MUSICVOLUME: UniqueId = UniqueId::new(2346531308);
    pub const SOUNDEFFECTVOLUME: UniqueId = UniqueId::new(1985131783);
    pub const SS_AIR_FEAR: UniqueId = UniqueId::new(1351367891);
    pub const SS_AIR_FREEFALL: UniqueId = UniqueId::new(3002758120);
    pub const SS_AIR_FURY: UniqueId = UniqueId::new(1029930033);
    pub const SS_AIR_MONTH: UniqueId = UniqueId::new(2648548617);
    pub const SS_AIR_PRESENCE: UniqueId = UniqueId::new(3847924954);
    pub const SS_AIR_RPM: UniqueId = UniqueId::new(822163944);
    pub const SS_AIR_SIZE: UniqueId = UniqueId::new(3074696722);
    pub const SS_AIR_STORM: UniqueId = UniqueId::new(3715662592);
    pub const SS_AIR_TIMEOFDAY: UniqueId = UniqueId::new(3203397129);
    pub const SS_AIR_TURBULENCE: UniqueId = UniqueId::new(4160247818);
}

pub mod banks {
    use crate::UniqueId;

    pub const INIT: UniqueId = UniqueId::new(1355168291);
    pub const SOUNDEFFECTS: UniqueId = UniqueId::new(3898083304);
}

pub mod busses {
    use crate::UniqueId;

    pub const MASTER_AUDIO_BUS: UniqueId = UniqueId::new(3803692087);
}

pub mod audio_devices {
    use crate::UniqueId;

    pub const NO_OUTPUT: UniqueId = UniqueId::new(2317455096);
    pub const SYSTEM: UniqueId = UniqueId::new(3859886410);
}

/// Every binding in the table, in declaration order
pub static BINDINGS: &[Binding] = &[
    Binding::new("PLAY_CELEBRATIONFANFARE", events::PLAY_CELEBRATIONFANFARE, Category::Event),
    Binding::new("PLAY_DESERTAMBIANCE", events::PLAY_DESERTAMBIANCE, Category::Event),
    Binding::new("PLAY_EXPLOSION", events::PLAY_EXPLOSION, Category::Event),
    Binding::new("PLAY_GAMEINTROTRACK", events::PLAY_GAMEINTROTRACK, Category::Event),
    Binding::new("PLAY_HELICOPTER_SOUND", events::PLAY_HELICOPTER_SOUND, Category::Event),
    Binding::new("PLAY_HELICOPTERMISSILE", events::PLAY_HELICOPTERMISSILE, Category::Event),
    Binding::new("PLAY_MAINMENUMUSIC", events::PLAY_MAINMENUMUSIC, Category::Event),
    Binding::new("PLAY_SOLIDER_GUNFIRE", events::PLAY_SOLIDER_GUNFIRE, Category::Event),
    Binding::new("PLAY_SOLIDERSCREAM", events::PLAY_SOLIDERSCREAM, Category::Event),
    Binding::new("PLAY_TANK_GUNFIRE", events::PLAY_TANK_GUNFIRE, Category::Event),
    Binding::new("SOUNDEFFECTSTATES", states::soundeffectstates::GROUP, Category::StateGroup),
    Binding::new("NONE", states::soundeffectstates::state::NONE, Category::State),
    Binding::new("MUSICVOLUME", game_parameters::MUSICVOLUME, Category::GameParameter),
    Binding::new("SOUNDEFFECTVOLUME", game_parameters::SOUNDEFFECTVOLUME, Category::GameParameter),
    Binding::new("SS_AIR_FEAR", game_parameters::SS_AIR_FEAR, Category::GameParameter),
    Binding::new("SS_AIR_FREEFALL", game_parameters::SS_AIR_FREEFALL, Category::GameParameter),
    Binding::new("SS_AIR_FURY", game_parameters::SS_AIR_FURY, Category::GameParameter),
    Binding::new("SS_AIR_MONTH", game_parameters::SS_AIR_MONTH, Category::GameParameter),
    Binding::new("SS_AIR_PRESENCE", game_parameters::SS_AIR_PRESENCE, Category::GameParameter),
    Binding::new("SS_AIR_RPM", game_parameters::SS_AIR_RPM, Category::GameParameter),
    Binding::new("SS_AIR_SIZE", game_parameters::SS_AIR_SIZE, Category::GameParameter),
    Binding::new("SS_AIR_STORM", game_parameters::SS_AIR_STORM, Category::GameParameter),
    Binding::new("SS_AIR_TIMEOFDAY", game_parameters::SS_AIR_TIMEOFDAY, Category::GameParameter),
    Binding::new("SS_AIR_TURBULENCE", game_parameters::SS_AIR_TURBULENCE, Category::GameParameter),
    Binding::new("INIT", banks::INIT, Category::Bank),
    Binding::new("SOUNDEFFECTS", banks::SOUNDEFFECTS, Category::Bank),
    Binding::new("MASTER_AUDIO_BUS", busses::MASTER_AUDIO_BUS, Category::Bus),
    Binding::new("NO_OUTPUT", audio_devices::NO_OUTPUT, Category::AudioDevice),
    Binding::new("SYSTEM", audio_devices::SYSTEM, Category::AudioDevice),
];
