use crate::diag::{Diagnostic, Diagnostics, Level};
use crate::layer::{EthernetII, Layer, Layers};
use crate::wire::{Result, View};

/// Configuration of a [`Decoder`].
///
/// [`Decoder`]: struct.Decoder.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Config {
    threshold: Level,
    collect: bool,
}

/// Decodes captured frames with a fixed configuration.
///
/// The decoder holds no state besides its configuration, one instance can be copied into or
/// shared between any number of threads.
///
/// ```
/// use framedecode::{Config, Decoder, Level};
///
/// let decoder = Decoder::new(Config::default().threshold(Level::Warn));
/// let mut bytes = [0u8; 20];
/// bytes[12..14].copy_from_slice(&[0x99, 0x99]);
///
/// let frame = decoder.decode(&bytes).unwrap();
/// assert_eq!(frame.stack(), ["EthernetII", "RAW"]);
/// assert_eq!(frame.diagnostics().len(), 1);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decoder {
    config: Config,
}

/// The result of decoding one captured frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<'a> {
    ethernet: EthernetII<'a>,
    /// The same chain as `ethernet`, as a layer.
    root: Layer<'a>,
    diagnostics: Vec<Diagnostic>,
}

impl Config {
    /// Set the minimum level of diagnostics passed on to the log.
    pub fn threshold(self, threshold: Level) -> Self {
        Config { threshold, ..self }
    }

    /// Choose whether diagnostics are kept in the returned frame.
    ///
    /// Logging does not depend on this.
    pub fn collect(self, collect: bool) -> Self {
        Config { collect, ..self }
    }

    /// The minimum level of logged diagnostics.
    pub fn get_threshold(&self) -> Level {
        self.threshold
    }

    /// Whether diagnostics are kept in the returned frame.
    pub fn get_collect(&self) -> bool {
        self.collect
    }
}

impl Default for Config {
    /// Log nothing below `Fatal`, keep every diagnostic.
    fn default() -> Self {
        Config {
            threshold: Level::default(),
            collect: true,
        }
    }
}

impl Decoder {
    /// Create a decoder with the given configuration.
    pub fn new(config: Config) -> Self {
        Decoder { config }
    }

    /// The configuration in use.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Decode a captured frame starting at its Ethernet header.
    ///
    /// Only fails with `Error::Truncated` if the buffer is shorter than an Ethernet header. Any
    /// other anomaly is recovered from and recorded in the diagnostics of the frame.
    pub fn decode<'a>(&self, buffer: &'a [u8]) -> Result<Frame<'a>> {
        let mut diag = Diagnostics::new(self.config.threshold, self.config.collect);
        let ethernet = EthernetII::decode(View::new(buffer), &mut diag)?;
        Ok(Frame {
            root: Layer::EthernetII(ethernet.clone()),
            ethernet,
            diagnostics: diag.into_inner(),
        })
    }
}

/// Decode a captured frame with the default configuration.
///
/// See [`Decoder::decode`].
///
/// [`Decoder::decode`]: struct.Decoder.html#method.decode
pub fn decode(buffer: &[u8]) -> Result<Frame<'_>> {
    Decoder::default().decode(buffer)
}

impl<'a> Frame<'a> {
    /// The root layer of the chain.
    pub fn root(&self) -> &Layer<'a> {
        &self.root
    }

    /// The Ethernet header at the root of the chain.
    pub fn ethernet(&self) -> &EthernetII<'a> {
        &self.ethernet
    }

    /// Iterate over all layers, the Ethernet header first.
    pub fn layers(&self) -> Layers<'_, 'a> {
        self.root.iter()
    }

    /// The labels of all layers, outermost first.
    pub fn stack(&self) -> Vec<&'static str> {
        self.root.stack()
    }

    /// The diagnostics recorded while decoding, in the order they were raised.
    ///
    /// Always empty if the decoder was configured not to collect them.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Query whether decoding raised no diagnostic at or above `level`.
    pub fn is_clean(&self, level: Level) -> bool {
        self.diagnostics.iter().all(|diag| diag.level() < level)
    }
}
