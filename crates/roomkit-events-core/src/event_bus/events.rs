//! Event vocabulary for both channels.
//!
//! The typed channel is keyed by [`RoomEngineEvent`], a closed set known at
//! compile time. The string channel is open-ended; [`ui_events`] lists the
//! keys used by the room kit itself, but any non-empty string is accepted.

use serde::{Deserialize, Serialize};

/// Engine-side events delivered on the typed channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomEngineEvent {
    /// Engine reported an error.
    Error,
    /// Local user was logged in elsewhere.
    KickedOffLine,
    /// Login signature expired.
    UserSigExpired,
    RoomNameChanged,
    LocalCameraStateChanged,
    LocalScreenStateChanged,
    LocalAudioStateChanged,
    LocalAudioRouteChanged,
    AllUserMicrophoneDisableChanged,
    AllUserCameraDisableChanged,
    SendMessageForAllUserDisableChanged,
    /// Room was dismissed by its owner.
    RoomDismissed,
    /// Local user was removed from the room.
    KickedOutOfRoom,
    RoomSpeechModeChanged,
    GetUserListCompletedForEnterRoom,
    RemoteUserEnterRoom,
    RemoteUserLeaveRoom,
    LocalUserCreateRoom,
    LocalUserEnterRoom,
    LocalUserExitRoom,
    LocalUserDestroyRoom,
    UserRoleChanged,
    UserScreenStateChanged,
    UserCameraStateChanged,
    /// A user's microphone was muted or unmuted.
    UserMicStateChanged,
    UserVoiceVolumeChanged,
    UserSendMessageAbilityChanged,
    UserNetworkQualityChanged,
    UserScreenCaptureStopped,
    RoomMaxSeatCountChanged,
    RemoteUserTakeSeat,
    RemoteUserLeaveSeat,
    /// A signalling request arrived for the local user.
    RequestReceived,
    RequestCancelled,
    ReceiveTextMessage,
    ReceiveCustomMessage,
    KickedOffSeat,
    UserTakeSeatRequestAdd,
    UserTakeSeatRequestRemove,
    LocalVideoFpsChanged,
    LocalVideoBitrateChanged,
    LocalVideoResolutionChanged,
    LocalAudioCaptureVolumeChanged,
    LocalAudioPlayVolumeChanged,
    LocalAudioVolumeEvaluationChanged,
}

impl RoomEngineEvent {
    /// Every engine event, in declaration order
    pub const ALL: [RoomEngineEvent; 45] = [
        RoomEngineEvent::Error,
        RoomEngineEvent::KickedOffLine,
        RoomEngineEvent::UserSigExpired,
        RoomEngineEvent::RoomNameChanged,
        RoomEngineEvent::LocalCameraStateChanged,
        RoomEngineEvent::LocalScreenStateChanged,
        RoomEngineEvent::LocalAudioStateChanged,
        RoomEngineEvent::LocalAudioRouteChanged,
        RoomEngineEvent::AllUserMicrophoneDisableChanged,
        RoomEngineEvent::AllUserCameraDisableChanged,
        RoomEngineEvent::SendMessageForAllUserDisableChanged,
        RoomEngineEvent::RoomDismissed,
        RoomEngineEvent::KickedOutOfRoom,
        RoomEngineEvent::RoomSpeechModeChanged,
        RoomEngineEvent::GetUserListCompletedForEnterRoom,
        RoomEngineEvent::RemoteUserEnterRoom,
        RoomEngineEvent::RemoteUserLeaveRoom,
        RoomEngineEvent::LocalUserCreateRoom,
        RoomEngineEvent::LocalUserEnterRoom,
        RoomEngineEvent::LocalUserExitRoom,
        RoomEngineEvent::LocalUserDestroyRoom,
        RoomEngineEvent::UserRoleChanged,
        RoomEngineEvent::UserScreenStateChanged,
        RoomEngineEvent::UserCameraStateChanged,
        RoomEngineEvent::UserMicStateChanged,
        RoomEngineEvent::UserVoiceVolumeChanged,
        RoomEngineEvent::UserSendMessageAbilityChanged,
        RoomEngineEvent::UserNetworkQualityChanged,
        RoomEngineEvent::UserScreenCaptureStopped,
        RoomEngineEvent::RoomMaxSeatCountChanged,
        RoomEngineEvent::RemoteUserTakeSeat,
        RoomEngineEvent::RemoteUserLeaveSeat,
        RoomEngineEvent::RequestReceived,
        RoomEngineEvent::RequestCancelled,
        RoomEngineEvent::ReceiveTextMessage,
        RoomEngineEvent::ReceiveCustomMessage,
        RoomEngineEvent::KickedOffSeat,
        RoomEngineEvent::UserTakeSeatRequestAdd,
        RoomEngineEvent::UserTakeSeatRequestRemove,
        RoomEngineEvent::LocalVideoFpsChanged,
        RoomEngineEvent::LocalVideoBitrateChanged,
        RoomEngineEvent::LocalVideoResolutionChanged,
        RoomEngineEvent::LocalAudioCaptureVolumeChanged,
        RoomEngineEvent::LocalAudioPlayVolumeChanged,
        RoomEngineEvent::LocalAudioVolumeEvaluationChanged,
    ];

    /// Canonical name of this event, as used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomEngineEvent::Error => "ERROR",
            RoomEngineEvent::KickedOffLine => "KICKED_OFF_LINE",
            RoomEngineEvent::UserSigExpired => "USER_SIG_EXPIRED",
            RoomEngineEvent::RoomNameChanged => "ROOM_NAME_CHANGED",
            RoomEngineEvent::LocalCameraStateChanged => "LOCAL_CAMERA_STATE_CHANGED",
            RoomEngineEvent::LocalScreenStateChanged => "LOCAL_SCREEN_STATE_CHANGED",
            RoomEngineEvent::LocalAudioStateChanged => "LOCAL_AUDIO_STATE_CHANGED",
            RoomEngineEvent::LocalAudioRouteChanged => "LOCAL_AUDIO_ROUTE_CHANGED",
            RoomEngineEvent::AllUserMicrophoneDisableChanged => {
                "ALL_USER_MICROPHONE_DISABLE_CHANGED"
            }
            RoomEngineEvent::AllUserCameraDisableChanged => "ALL_USER_CAMERA_DISABLE_CHANGED",
            RoomEngineEvent::SendMessageForAllUserDisableChanged => {
                "SEND_MESSAGE_FOR_ALL_USER_DISABLE_CHANGED"
            }
            RoomEngineEvent::RoomDismissed => "ROOM_DISMISSED",
            RoomEngineEvent::KickedOutOfRoom => "KICKED_OUT_OF_ROOM",
            RoomEngineEvent::RoomSpeechModeChanged => "ROOM_SPEECH_MODE_CHANGED",
            RoomEngineEvent::GetUserListCompletedForEnterRoom => {
                "GET_USER_LIST_COMPLETED_FOR_ENTER_ROOM"
            }
            RoomEngineEvent::RemoteUserEnterRoom => "REMOTE_USER_ENTER_ROOM",
            RoomEngineEvent::RemoteUserLeaveRoom => "REMOTE_USER_LEAVE_ROOM",
            RoomEngineEvent::LocalUserCreateRoom => "LOCAL_USER_CREATE_ROOM",
            RoomEngineEvent::LocalUserEnterRoom => "LOCAL_USER_ENTER_ROOM",
            RoomEngineEvent::LocalUserExitRoom => "LOCAL_USER_EXIT_ROOM",
            RoomEngineEvent::LocalUserDestroyRoom => "LOCAL_USER_DESTROY_ROOM",
            RoomEngineEvent::UserRoleChanged => "USER_ROLE_CHANGED",
            RoomEngineEvent::UserScreenStateChanged => "USER_SCREEN_STATE_CHANGED",
            RoomEngineEvent::UserCameraStateChanged => "USER_CAMERA_STATE_CHANGED",
            RoomEngineEvent::UserMicStateChanged => "USER_MIC_STATE_CHANGED",
            RoomEngineEvent::UserVoiceVolumeChanged => "USER_VOICE_VOLUME_CHANGED",
            RoomEngineEvent::UserSendMessageAbilityChanged => "USER_SEND_MESSAGE_ABILITY_CHANGED",
            RoomEngineEvent::UserNetworkQualityChanged => "USER_NETWORK_QUALITY_CHANGED",
            RoomEngineEvent::UserScreenCaptureStopped => "USER_SCREEN_CAPTURE_STOPPED",
            RoomEngineEvent::RoomMaxSeatCountChanged => "ROOM_MAX_SEAT_COUNT_CHANGED",
            RoomEngineEvent::RemoteUserTakeSeat => "REMOTE_USER_TAKE_SEAT",
            RoomEngineEvent::RemoteUserLeaveSeat => "REMOTE_USER_LEAVE_SEAT",
            RoomEngineEvent::RequestReceived => "REQUEST_RECEIVED",
            RoomEngineEvent::RequestCancelled => "REQUEST_CANCELLED",
            RoomEngineEvent::ReceiveTextMessage => "RECEIVE_TEXT_MESSAGE",
            RoomEngineEvent::ReceiveCustomMessage => "RECEIVE_CUSTOM_MESSAGE",
            RoomEngineEvent::KickedOffSeat => "KICKED_OFF_SEAT",
            RoomEngineEvent::UserTakeSeatRequestAdd => "USER_TAKE_SEAT_REQUEST_ADD",
            RoomEngineEvent::UserTakeSeatRequestRemove => "USER_TAKE_SEAT_REQUEST_REMOVE",
            RoomEngineEvent::LocalVideoFpsChanged => "LOCAL_VIDEO_FPS_CHANGED",
            RoomEngineEvent::LocalVideoBitrateChanged => "LOCAL_VIDEO_BITRATE_CHANGED",
            RoomEngineEvent::LocalVideoResolutionChanged => "LOCAL_VIDEO_RESOLUTION_CHANGED",
            RoomEngineEvent::LocalAudioCaptureVolumeChanged => "LOCAL_AUDIO_CAPTURE_VOLUME_CHANGED",
            RoomEngineEvent::LocalAudioPlayVolumeChanged => "LOCAL_AUDIO_PLAY_VOLUME_CHANGED",
            RoomEngineEvent::LocalAudioVolumeEvaluationChanged => {
                "LOCAL_AUDIO_VOLUME_EVALUATION_CHANGED"
            }
        }
    }
}

impl std::fmt::Display for RoomEngineEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys used on the string channel
pub mod ui_events {
    /// Outer topic that namespaces room kit keys on the shared notification bus
    pub const ROOM_KIT_EVENT: &str = "RoomKitEvent";

    pub const CONFIGURATION_CHANGE: &str = "appConfigurationChange";
    pub const KICKED_OFF_LINE: &str = "kickedOffLine";
    pub const AGREE_TAKE_SEAT: &str = "agreeTakeSeat";
    pub const DISAGREE_TAKE_SEAT: &str = "disagreeTakeSeat";
    pub const INVITE_TAKE_SEAT: &str = "inviteTakeSeat";
    pub const SHOW_USER_MANAGEMENT: &str = "showUserManagement";
    pub const SHOW_EXIT_ROOM_VIEW: &str = "showLeaveRoomView";
    pub const SHOW_MEETING_INFO: &str = "showMeetingInfo";
    pub const SHOW_USER_LIST: &str = "showUserList";
    pub const SHOW_APPLY_LIST: &str = "showApplyList";
    pub const SHOW_QRCODE_VIEW: &str = "showQRCodeView";
    pub const SHOW_INVITE_VIEW: &str = "showInviteView";

    pub const OWNER_EXIT_ROOM_ACTION: &str = "OWNER_EXIT_ROOM_ACTION";

    pub const ENTER_FLOAT_WINDOW: &str = "ENTER_FLOAT_WINDOW";
    pub const EXIT_FLOAT_WINDOW: &str = "EXIT_FLOAT_WINDOW";

    pub const SEND_IM_MSG_COMPLETE: &str = "SEND_IM_MSG_COMPLETE";

    pub const BAR_SHOW_TIME_RECOUNT: &str = "BAR_SHOW_TIME_RECOUNT";
}
