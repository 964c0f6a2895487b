pub(crate) mod config;
pub(crate) mod follower;
pub(crate) mod integrator;
pub(crate) mod mapper;
pub(crate) mod playback;
pub(crate) mod state;
