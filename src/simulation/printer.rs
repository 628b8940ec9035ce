/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use std::io::{self, Write};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::StatusReport;

/// Writes every report received on `status_rx` to `out` until all senders are gone.
pub fn print_reports<W: Write>(
    status_rx: cbc::Receiver<StatusReport>,
    json: bool,
    mut out: W,
) -> io::Result<()> {
    for report in status_rx.iter() {
        if json {
            let line = report
                .to_json()
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writeln!(out, "{}", line)?;
        } else {
            writeln!(out, "{}", report)?;
        }
        out.flush()?;
    }
    Ok(())
}

/***************************************/
/*             Unit tests              */
/***************************************/
