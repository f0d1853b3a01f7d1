//! Action type names shared with the client-side store.

use std::str::FromStr;

/// Unknown action type name.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown action type: {name:?}")]
pub struct UnknownActionType {
    name: String,
}

macro_rules! action_types {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $value:literal,)* }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                #[allow(missing_docs)]
                $variant,
            )*
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $name {
            /// Every action type, in declaration order.
            pub const ALL: &[Self] = &[$(Self::$variant,)*];

            /// Returns the wire name of the action type.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)*
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownActionType;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($value => Ok(Self::$variant),)*
                    _ => Err(UnknownActionType { name: s.to_owned() }),
                }
            }
        }
    };
}

action_types! {
    /// Puzzle data lifecycle events.
    PuzzleActionType {
        GetPuzzleDataSuccess => "GET_PUZZLE_DATA_SUCCESS",
        GetPuzzleDataFailure => "GET_PUZZLE_DATA_FAILURE",
        SubmitPuzzleDataSuccess => "SUBMIT_PUZZLE_DATA_SUCCESS",
        SubmitPuzzleDataFailure => "SUBMIT_PUZZLE_DATA_FAILURE",
        SendingData => "SENDING_DATA",
        FromCache => "FROM_CACHE",
        ToMongo => "TO_MONGO",
        FromMongo => "FROM_MONGO",
    }
}

action_types! {
    /// Cluster monitoring socket events.
    WebsocketActionType {
        ConnectToSocket => "CONNECT_TO_SOCKET",
        DisconnectFromSocket => "DISCONNECT_FROM_SOCKET",
        GetPods => "GET_PODS",
        PodUp => "POD_UP",
        PodDown => "POD_DOWN",
        ActiveInstance => "ACTIVE_INSTANCE",
        Scale => "SCALE",
    }
}
