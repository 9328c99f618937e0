pub const VOICE_API_KEY: &str = "VOICE_API_KEY";

pub const BASE_URL: &str = "wss://realtime.voiceplatform.ai/v1";

pub const AUTHORIZATION_HEADER: &str = "Authorization";
