//! Scope-bound release against real files, directories and sockets.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};

use crate::common::{init_logging, Ledger, TrackedHandle};
use stdaux::release::{closedir, fclose, free};
use stdaux::{defer, release, Release, ScopeGuard};

#[test]
fn test_buffered_stream_flushed_at_scope_exit() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.txt");

    {
        let file = File::create(&path).unwrap();
        let mut stream = ScopeGuard::new(Some(BufWriter::new(file)));
        if let Some(w) = stream.as_mut() {
            w.write_all(b"written through a guard").unwrap();
        }
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), "written through a guard");
}

#[test]
fn test_fclose_then_scope_exit_is_single_close() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("early.txt");

    {
        let mut stream = ScopeGuard::new(Some(BufWriter::new(File::create(&path).unwrap())));
        if let Some(w) = stream.as_mut() {
            w.write_all(b"early").unwrap();
        }
        let taken = stream.replace(None);
        *stream = fclose(taken);
        assert!(!stream.is_armed());
        assert_eq!(fs::read_to_string(&path).unwrap(), "early");
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), "early");
}

#[test]
fn test_directory_handle_released() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a"), b"").unwrap();

    let mut entries = Some(fs::read_dir(dir.path()).unwrap());
    let count = entries.as_mut().map_or(0, |it| it.count());
    assert_eq!(count, 1);
    entries = closedir(entries);
    assert!(entries.is_none());
}

#[test]
fn test_free_unsized_and_sentinel() {
    let mut text: Option<Box<str>> = Some("scratch".into());
    text = free(text);
    assert!(text.is_none());
    text = free(text);
    assert!(text.is_none());
}

#[test]
fn test_guards_release_in_reverse_declaration_order() {
    let ledger = Ledger::start();
    {
        let _first = ScopeGuard::new(TrackedHandle::acquire(1));
        let _second = ScopeGuard::new(TrackedHandle::acquire(2));
        let _third = ScopeGuard::new(TrackedHandle::acquire(3));
    }
    assert_eq!(ledger.released(), vec![3, 2, 1]);
}

#[test]
fn test_guard_released_on_question_mark_exit() {
    fn parse(input: &str) -> Result<u32, std::num::ParseIntError> {
        let _handle = ScopeGuard::new(TrackedHandle::acquire(4));
        let value = input.parse::<u32>()?;
        Ok(value)
    }

    let ledger = Ledger::start();
    assert!(parse("nope").is_err());
    assert_eq!(parse("12"), Ok(12));
    assert_eq!(ledger.released(), vec![4, 4]);
}

#[test]
fn test_handle_moved_out_is_released_by_new_owner() {
    let ledger = Ledger::start();
    let moved = {
        let guard = ScopeGuard::new(TrackedHandle::acquire(5));
        guard.into_inner()
    };
    assert!(ledger.released().is_empty());
    {
        let _adopted = ScopeGuard::new(moved);
    }
    assert_eq!(ledger.released(), vec![5]);
}

#[test]
fn test_defer_runs_at_scope_exit() {
    let mut log = Vec::new();
    {
        let log = &mut log;
        let _note = defer(move || log.push("deferred"));
    }
    assert_eq!(log, vec!["deferred"]);
}

#[test]
fn test_release_is_idempotent_on_sentinel() {
    let ledger = Ledger::start();
    let mut handle = TrackedHandle::acquire(6);
    handle = release(handle);
    handle = release(handle);
    assert!(handle.is_sentinel());
    assert_eq!(ledger.released(), vec![6]);
}

#[cfg(unix)]
#[test]
fn test_fd_guard_closes_socket() {
    use std::os::fd::OwnedFd;
    use std::os::unix::net::UnixStream;
    use stdaux::Fd;

    init_logging();
    let (ours, mut peer) = UnixStream::pair().unwrap();
    {
        let _fd = ScopeGuard::new(Fd::from(OwnedFd::from(ours)));
    }
    let mut buf = [0u8; 1];
    assert_eq!(peer.read(&mut buf).unwrap(), 0);
}

#[cfg(unix)]
#[test]
fn test_close_raw_descriptor_returns_sentinel() {
    use std::os::fd::IntoRawFd;
    use stdaux::{close, Fd};

    init_logging();
    let (ours, _peer) = std::os::unix::net::UnixStream::pair().unwrap();
    let raw = ours.into_raw_fd();
    assert_eq!(close(raw), Fd::INVALID);
}
