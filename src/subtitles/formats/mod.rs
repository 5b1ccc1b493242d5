mod microdvd;
mod srt;
mod ssa;
mod subviewer;
mod webvtt;

pub(crate) use microdvd::MicroDvdParser;
pub(crate) use srt::SubRipParser;
pub(crate) use ssa::SubStationAlphaParser;
pub(crate) use subviewer::SubViewerParser;
pub(crate) use webvtt::WebVttParser;
