//! OS login-name lookup.
//!
//! Wraps `getlogin_r(3)`, which reads the login recorded for the process's
//! controlling terminal. Processes without one (cron jobs, CI runners,
//! detached services) get `ENXIO` or `ENOTTY` back.

use crate::error::{Error, Result};
use crate::port::outbound::identity::IdentityProvider;

/// Upper bound for the name buffer; Linux caps logins at 256 bytes.
const MAX_LOGIN_BUFFER: usize = 4096;

/// Login name of the session the process is attached to.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionIdentity;

impl IdentityProvider for SessionIdentity {
    fn current_login(&self) -> Result<String> {
        getlogin().map_err(Error::Identity)
    }
}

#[cfg(unix)]
extern "C" {
    fn getlogin_r(name: *mut libc::c_char, namesize: libc::size_t) -> libc::c_int;
}

#[cfg(unix)]
fn getlogin() -> std::io::Result<String> {
    use std::ffi::CStr;

    let mut buf = vec![0u8; 64];
    loop {
        let rc = unsafe { getlogin_r(buf.as_mut_ptr().cast(), buf.len()) };
        match rc {
            0 => break,
            libc::ERANGE if buf.len() < MAX_LOGIN_BUFFER => buf.resize(buf.len() * 2, 0),
            -1 => return Err(std::io::Error::last_os_error()),
            errno => return Err(std::io::Error::from_raw_os_error(errno)),
        }
    }

    let name = CStr::from_bytes_until_nul(&buf)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    let name = name
        .to_str()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    if name.is_empty() {
        return Err(std::io::Error::from_raw_os_error(libc::ENXIO));
    }
    Ok(name.to_owned())
}

#[cfg(not(unix))]
fn getlogin() -> std::io::Result<String> {
    Err(std::io::Error::new(
        std::io::ErrorKind::Unsupported,
        "login names are only available on unix",
    ))
}
