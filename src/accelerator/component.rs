/// a pipeline stage that reports latency under its configured name
pub trait Component {
    fn name(&self) -> &str;
}
