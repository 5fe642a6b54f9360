use crate::result::SearchResult;

/// Receives search results in traversal order as soon as each one is decided.
pub trait ResultSink {
    fn accept(&mut self, result: SearchResult);
}

/// Aggregate mode: collect everything, return the list at the end.
impl ResultSink for Vec<SearchResult> {
    fn accept(&mut self, result: SearchResult) {
        self.push(result);
    }
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn accept(&mut self, result: SearchResult) {
        (**self).accept(result);
    }
}

/// Streaming mode: hand every result to a callback the moment it exists.
pub struct CallbackSink<F>(pub F);

impl<F: FnMut(SearchResult)> ResultSink for CallbackSink<F> {
    fn accept(&mut self, result: SearchResult) {
        (self.0)(result);
    }
}
