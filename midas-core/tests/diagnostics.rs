#![cfg(feature = "tracing")]

use std::io;
use std::sync::{Arc, Mutex};

use midas_core::report_failure;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn report_failure_emits_error_event() {
    let sink = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_ansi(false)
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        report_failure("IF1601.json has no close series");
    });

    let out = sink.text();
    assert!(out.contains("ERROR"), "{out}");
    assert!(out.contains("midas_core::failure"), "{out}");
    assert!(out.contains("Failure : IF1601.json has no close series"), "{out}");
}
