//! Reading and writing the generated header format
//!
//! The authoring tool regenerates the identifier header wholesale on
//! every soundbank build. [`parse`] turns that text into an
//! [`crate::table::IdTable`]; [`write`] renders a table back in the
//! canonical format, and [`to_rust_module`] renders it as a Rust
//! constant module.

mod parser;
mod writer;

pub use parser::{parse, parse_file};
pub use writer::{to_rust_module, write};

use thiserror::Error;

/// Errors raised while reading a generated header
#[derive(Error, Debug)]
pub enum HeaderError {
    /// Line could not be interpreted as part of the format
    #[error("line {line}: {message}")]
    Syntax {
        /// 1-based line number in the input
        line: usize,
        /// What went wrong on that line
        message: String,
    },

    /// Input ended inside an open namespace
    #[error("unexpected end of file: {0} namespace(s) left open")]
    UnexpectedEof(usize),

    /// IO failure while reading from disk
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Header emitted for the game's current sound project, used as the
/// round-trip fixture.
#[cfg(test)]
pub(crate) const GENERATED_HEADER: &str = r#"/////////////////////////////////////////////////////////////////////////////////////////////////////
//
// Audiokinetic Wwise generated include file. Do not edit.
//
/////////////////////////////////////////////////////////////////////////////////////////////////////

#ifndef __WWISE_IDS_H__
#define __WWISE_IDS_H__

#include <AK/SoundEngine/Common/AkTypes.h>

namespace AK
{
    namespace EVENTS
    {
        static const AkUniqueID PLAY_CELEBRATIONFANFARE = 1257416293U;
        static const AkUniqueID PLAY_DESERTAMBIANCE = 3643602477U;
        static const AkUniqueID PLAY_EXPLOSION = 4030404899U;
        static const AkUniqueID PLAY_GAMEINTROTRACK = 2853397551U;
        static const AkUniqueID PLAY_HELICOPTER_SOUND = 3013451977U;
        static const AkUniqueID PLAY_HELICOPTERMISSILE = 2723016199U;
        static const AkUniqueID PLAY_MAINMENUMUSIC = 667425441U;
        static const AkUniqueID PLAY_SOLIDER_GUNFIRE = 1988800053U;
        static const AkUniqueID PLAY_SOLIDERSCREAM = 2568326629U;
        static const AkUniqueID PLAY_TANK_GUNFIRE = 3624895801U;
    } // namespace EVENTS

    namespace STATES
    {
        namespace SOUNDEFFECTSTATES
        {
            static const AkUniqueID GROUP = 1216687119U;

            namespace STATE
            {
                static const AkUniqueID NONE = 748895195U;
            } // namespace STATE
        } // namespace SOUNDEFFECTSTATES

    } // namespace STATES

    namespace GAME_PARAMETERS
    {
        static const AkUniqueID MUSICVOLUME = 2346531308U;
        static const AkUniqueID SOUNDEFFECTVOLUME = 1985131783U;
        static const AkUniqueID SS_AIR_FEAR = 1351367891U;
        static const AkUniqueID SS_AIR_FREEFALL = 3002758120U;
        static const AkUniqueID SS_AIR_FURY = 1029930033U;
        static const AkUniqueID SS_AIR_MONTH = 2648548617U;
        static const AkUniqueID SS_AIR_PRESENCE = 3847924954U;
        static const AkUniqueID SS_AIR_RPM = 822163944U;
        static const AkUniqueID SS_AIR_SIZE = 3074696722U;
        static const AkUniqueID SS_AIR_STORM = 3715662592U;
        static const AkUniqueID SS_AIR_TIMEOFDAY = 3203397129U;
        static const AkUniqueID SS_AIR_TURBULENCE = 4160247818U;
    } // namespace GAME_PARAMETERS

    namespace BANKS
    {
        static const AkUniqueID INIT = 1355168291U;
        static const AkUniqueID SOUNDEFFECTS = 3898083304U;
    } // namespace BANKS

    namespace BUSSES
    {
        static const AkUniqueID MASTER_AUDIO_BUS = 3803692087U;
    } // namespace BUSSES

    namespace AUDIO_DEVICES
    {
        static const AkUniqueID NO_OUTPUT = 2317455096U;
        static const AkUniqueID SYSTEM = 3859886410U;
    } // namespace AUDIO_DEVICES

}// namespace AK

#endif // __WWISE_IDS_H__
"#;
