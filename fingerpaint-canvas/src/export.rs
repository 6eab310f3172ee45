//! Off-thread PNG encoding and writing of exported rasters.

use crate::error::{CanvasError, CanvasResult};
use crate::raster::Raster;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::thread::JoinHandle;

use futures::channel::{mpsc, mpsc::Sender, oneshot};
use futures::{SinkExt, StreamExt};

enum ExportCommand {
    EncodePng {
        raster: Raster,
        ppi: Option<f32>,
        responder: oneshot::Sender<CanvasResult<Vec<u8>>>,
    },
    WritePng {
        raster: Raster,
        path: PathBuf,
        ppi: Option<f32>,
        responder: oneshot::Sender<CanvasResult<PathBuf>>,
    },
}

/// Background worker that encodes and writes exported rasters.
///
/// Take the snapshot on the surface's thread with
/// [`DrawingSurface::export_composite`](crate::DrawingSurface::export_composite),
/// then hand it over here. Dropping a returned future before it resolves
/// discards the result; the worker keeps going with the next request.
///
/// # Examples
///
/// ```
/// use fingerpaint_canvas::{DrawingSurface, ExportWorker, Point};
///
/// let mut surface = DrawingSurface::builder().size(64, 64).build().unwrap();
/// surface.pointer_down(Point::new(4.0, 4.0)).unwrap();
/// surface.pointer_up(Point::new(60.0, 60.0)).unwrap();
///
/// let raster = surface.export_composite().unwrap();
/// let mut worker = ExportWorker::new();
/// let png = futures::executor::block_on(worker.encode_png(raster, None)).unwrap();
/// assert_eq!(&png[1..4], b"PNG");
/// ```
#[derive(Clone)]
pub struct ExportWorker {
    sender: Sender<ExportCommand>,
    _handle: Arc<JoinHandle<()>>,
}

impl ExportWorker {
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ExportCommand>(32);

        let handle = Arc::new(thread::spawn(move || {
            while let Some(cmd) = futures::executor::block_on(receiver.next()) {
                match cmd {
                    ExportCommand::EncodePng {
                        raster,
                        ppi,
                        responder,
                    } => {
                        let png_result = raster.to_png(ppi);
                        responder.send(png_result).ok();
                    }
                    ExportCommand::WritePng {
                        raster,
                        path,
                        ppi,
                        responder,
                    } => {
                        let write_result = raster.to_png(ppi).and_then(|png_data| {
                            std::fs::write(&path, png_data)?;
                            log::debug!(target: "export", "wrote {}", path.display());
                            Ok(path)
                        });
                        responder.send(write_result).ok();
                    }
                }
            }
            log::debug!(target: "export", "export worker shutting down");
        }));

        Self {
            sender,
            _handle: handle,
        }
    }

    /// Encode `raster` as PNG on the worker thread.
    pub async fn encode_png(&mut self, raster: Raster, ppi: Option<f32>) -> CanvasResult<Vec<u8>> {
        let (resp_tx, resp_rx) = oneshot::channel::<CanvasResult<Vec<u8>>>();
        let cmd = ExportCommand::EncodePng {
            raster,
            ppi,
            responder: resp_tx,
        };
        self.request(cmd, resp_rx).await
    }

    /// Encode `raster` as PNG and write it to `path` on the worker thread.
    /// Resolves to the path that was written.
    pub async fn write_png(
        &mut self,
        raster: Raster,
        path: impl Into<PathBuf>,
        ppi: Option<f32>,
    ) -> CanvasResult<PathBuf> {
        let (resp_tx, resp_rx) = oneshot::channel::<CanvasResult<PathBuf>>();
        let cmd = ExportCommand::WritePng {
            raster,
            path: path.into(),
            ppi,
            responder: resp_tx,
        };
        self.request(cmd, resp_rx).await
    }

    async fn request<T>(
        &mut self,
        cmd: ExportCommand,
        resp_rx: oneshot::Receiver<CanvasResult<T>>,
    ) -> CanvasResult<T> {
        // Send request
        if let Err(err) = self.sender.send(cmd).await {
            return Err(CanvasError::ExportError(format!(
                "Failed to send export request: {}",
                err
            )));
        }

        // Wait for result
        match resp_rx.await {
            Ok(result) => result,
            Err(err) => Err(CanvasError::ExportError(format!(
                "Failed to retrieve export result: {}",
                err
            ))),
        }
    }
}

impl Default for ExportWorker {
    fn default() -> Self {
        Self::new()
    }
}
