//! In-memory recorder for tests
//!
//! `MockRecorder` records every call it receives instead of touching any
//! device or process. `MockRecorderFactory` counts the recorders it hands
//! out and keeps a journal of all their calls, so a test can inspect a
//! recorder even after a failed build dropped it.

use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::plan::RecorderOp;
use crate::profile::{AudioCodec, OutputFormat, VideoCodec};
use crate::recorder::{AudioSource, MediaRecorder, RecorderFactory, VideoSource};

/// A call received by a [`MockRecorder`]
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Configure(RecorderOp),
    Prepare,
    Start,
    Stop,
}

type Journal = Arc<Mutex<Vec<(usize, MockCall)>>>;

#[derive(Debug)]
pub struct MockRecorder {
    serial: usize,
    calls: Vec<MockCall>,
    journal: Option<Journal>,
    prepare_error: Option<io::ErrorKind>,
    prepared: bool,
    recording: bool,
}

impl MockRecorder {
    /// A recorder that is not attached to any factory journal
    pub fn detached(serial: usize) -> Self {
        Self {
            serial,
            calls: Vec::new(),
            journal: None,
            prepare_error: None,
            prepared: false,
            recording: false,
        }
    }

    /// Creation order within the owning factory, starting at 1
    pub fn serial(&self) -> usize {
        self.serial
    }

    pub fn calls(&self) -> &[MockCall] {
        &self.calls
    }

    /// Configuration calls only, in the order received
    pub fn ops(&self) -> Vec<RecorderOp> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                MockCall::Configure(op) => Some(op.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    fn record(&mut self, call: MockCall) {
        if let Some(journal) = &self.journal {
            if let Ok(mut entries) = journal.lock() {
                entries.push((self.serial, call.clone()));
            }
        }
        self.calls.push(call);
    }

    fn configure(&mut self, op: RecorderOp) {
        self.record(MockCall::Configure(op));
    }
}

impl MediaRecorder for MockRecorder {
    fn set_audio_source(&mut self, source: AudioSource) {
        self.configure(RecorderOp::SetAudioSource(source));
    }

    fn set_audio_encoding_bit_rate(&mut self, bit_rate: u32) {
        self.configure(RecorderOp::SetAudioEncodingBitRate(bit_rate));
    }

    fn set_video_source(&mut self, source: VideoSource) {
        self.configure(RecorderOp::SetVideoSource(source));
    }

    fn set_output_format(&mut self, format: OutputFormat) {
        self.configure(RecorderOp::SetOutputFormat(format));
    }

    fn set_audio_encoder(&mut self, codec: AudioCodec) {
        self.configure(RecorderOp::SetAudioEncoder(codec));
    }

    fn set_video_encoder(&mut self, codec: VideoCodec) {
        self.configure(RecorderOp::SetVideoEncoder(codec));
    }

    fn set_video_encoding_bit_rate(&mut self, bit_rate: u32) {
        self.configure(RecorderOp::SetVideoEncodingBitRate(bit_rate));
    }

    fn set_audio_sampling_rate(&mut self, sample_rate: u32) {
        self.configure(RecorderOp::SetAudioSamplingRate(sample_rate));
    }

    fn set_video_frame_rate(&mut self, frame_rate: u32) {
        self.configure(RecorderOp::SetVideoFrameRate(frame_rate));
    }

    fn set_capture_rate(&mut self, fps: f64) {
        self.configure(RecorderOp::SetCaptureRate(fps));
    }

    fn set_video_size(&mut self, width: u32, height: u32) {
        self.configure(RecorderOp::SetVideoSize { width, height });
    }

    fn set_output_file(&mut self, path: &Path) {
        self.configure(RecorderOp::SetOutputFile(path.to_path_buf()));
    }

    fn set_orientation_hint(&mut self, degrees: i32) {
        self.configure(RecorderOp::SetOrientationHint(degrees));
    }

    fn prepare(&mut self) -> io::Result<()> {
        self.record(MockCall::Prepare);
        if let Some(kind) = self.prepare_error {
            return Err(io::Error::new(kind, "mock prepare failure"));
        }
        self.prepared = true;
        Ok(())
    }

    fn start(&mut self) -> io::Result<()> {
        self.record(MockCall::Start);
        if !self.prepared {
            return Err(io::Error::other("start called before prepare"));
        }
        self.recording = true;
        Ok(())
    }

    fn stop(&mut self) -> io::Result<()> {
        self.record(MockCall::Stop);
        if !self.recording {
            return Err(io::Error::other("stop called while not recording"));
        }
        self.recording = false;
        Ok(())
    }
}

/// Hands out [`MockRecorder`]s. Clones share the counter and journal.
#[derive(Debug, Clone, Default)]
pub struct MockRecorderFactory {
    created: Arc<AtomicUsize>,
    journal: Journal,
    prepare_error: Option<io::ErrorKind>,
}

impl MockRecorderFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// A factory whose recorders fail `prepare` with `kind`
    pub fn failing(kind: io::ErrorKind) -> Self {
        Self {
            prepare_error: Some(kind),
            ..Self::default()
        }
    }

    /// Number of recorders handed out so far
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    /// Every call made on any recorder from this factory, tagged with the
    /// recorder's serial
    pub fn journal(&self) -> Vec<(usize, MockCall)> {
        self.journal
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl RecorderFactory for MockRecorderFactory {
    type Recorder = MockRecorder;

    fn make_recorder(&self) -> MockRecorder {
        let serial = self.created.fetch_add(1, Ordering::SeqCst) + 1;
        MockRecorder {
            journal: Some(Arc::clone(&self.journal)),
            prepare_error: self.prepare_error,
            ..MockRecorder::detached(serial)
        }
    }
}
