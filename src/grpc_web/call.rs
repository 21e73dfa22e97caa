use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, Mutex},
    task::{Context, Poll},
};
use strum_macros::Display;
use tokio::task::JoinHandle;
use tonic::Status;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum CallState {
    Pending,
    Delivered,
    Errored,
    Cancelled,
}

/// Handle to a unary call running on a tokio task.
///
/// Awaiting the handle yields the call result. Dropping it detaches the task, use
/// [`UnaryCall::cancel`] to abort it.
#[derive(Debug)]
pub struct UnaryCall<T> {
    task: JoinHandle<Result<T, Status>>,
    state: Arc<Mutex<CallState>>,
}

impl<T> UnaryCall<T>
where
    T: Send + 'static,
{
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = Result<T, Status>> + Send + 'static,
    {
        let state = Arc::new(Mutex::new(CallState::Pending));
        let task_state = Arc::clone(&state);

        let task = tokio::spawn(async move {
            let result = future.await;
            settle(&task_state, &result);
            result
        });

        Self { task, state }
    }

    /// Starts a generated client call, e.g.
    /// `UnaryCall::unary(async move { client.list_gateways(request).await })`, keeping only the
    /// response message.
    pub fn unary<F>(call: F) -> Self
    where
        F: Future<Output = Result<tonic::Response<T>, Status>> + Send + 'static,
    {
        Self::spawn(async move { call.await.map(tonic::Response::into_inner) })
    }
}

impl UnaryCall<()> {
    /// Runs `future` and hands its outcome to `callback`, once, unless the call is cancelled
    /// first. The returned handle resolves after the callback returned.
    pub fn spawn_with_callback<T, F, C>(future: F, callback: C) -> Self
    where
        T: Send + 'static,
        F: Future<Output = Result<T, Status>> + Send + 'static,
        C: FnOnce(Result<T, Status>) + Send + 'static,
    {
        let state = Arc::new(Mutex::new(CallState::Pending));
        let task_state = Arc::clone(&state);

        let task = tokio::spawn(async move {
            let result = future.await;
            if settle(&task_state, &result) == CallState::Cancelled {
                return Err(Status::cancelled("call cancelled"));
            }
            callback(result);
            Ok(())
        });

        Self { task, state }
    }
}

impl<T> UnaryCall<T> {
    /// Aborts the call if it is still pending. Returns whether this call did the cancelling.
    pub fn cancel(&self) -> bool {
        let mut state = match self.state.lock() {
            Ok(state) => state,
            Err(poisoned) => poisoned.into_inner(),
        };

        if *state != CallState::Pending {
            return false;
        }

        *state = CallState::Cancelled;
        self.task.abort();
        true
    }

    pub fn state(&self) -> CallState {
        match self.state.lock() {
            Ok(state) => *state,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Moves a pending call to its final state and returns the state the call ended up in.
fn settle<T>(state: &Mutex<CallState>, result: &Result<T, Status>) -> CallState {
    let mut state = match state.lock() {
        Ok(state) => state,
        Err(poisoned) => poisoned.into_inner(),
    };

    if *state == CallState::Pending {
        *state = match result {
            Ok(_) => CallState::Delivered,
            Err(_) => CallState::Errored,
        };
    }

    *state
}

impl<T> Future for UnaryCall<T> {
    type Output = Result<T, Status>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let joined = match Pin::new(&mut self.task).poll(cx) {
            Poll::Ready(joined) => joined,
            Poll::Pending => return Poll::Pending,
        };

        if self.state() == CallState::Cancelled {
            return Poll::Ready(Err(Status::cancelled("call cancelled")));
        }

        Poll::Ready(match joined {
            Ok(result) => result,
            Err(err) if err.is_cancelled() => Err(Status::cancelled("call cancelled")),
            Err(err) => Err(Status::internal(format!("call task failed: {}", err))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grpc_web::Code;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn awaiting_yields_the_result() {
        let call = UnaryCall::spawn(async { Ok::<_, Status>(42) });
        assert_eq!(call.await.unwrap(), 42);
    }

    #[tokio::test]
    async fn unary_keeps_the_message() {
        let call = UnaryCall::unary(async { Ok::<_, Status>(tonic::Response::new("reply")) });
        assert_eq!(call.await.unwrap(), "reply");
    }

    #[tokio::test]
    async fn callback_runs_exactly_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);

        let call = UnaryCall::spawn_with_callback(async { Err::<u32, _>(Status::new(Code::NotFound, "gone")) }, move |result| {
            assert_eq!(result.unwrap_err().code(), Code::NotFound);
            seen.fetch_add(1, Ordering::SeqCst);
        });

        call.await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn cancel_before_completion_suppresses_callback() {
        let (release, wait) = oneshot::channel::<()>();
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);

        let call = UnaryCall::spawn_with_callback(
            async move {
                let _ = wait.await;
                Ok::<_, Status>("late")
            },
            move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            },
        );

        assert!(call.cancel());
        assert!(!call.cancel());
        assert_eq!(call.state(), CallState::Cancelled);
        let _ = release.send(());

        let status = call.await.unwrap_err();
        assert_eq!(status.code(), Code::Cancelled);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn cancel_after_delivery_is_a_no_op() {
        let call = UnaryCall::spawn(async { Ok::<_, Status>(()) });
        while !call.is_finished() {
            tokio::task::yield_now().await;
        }

        assert!(!call.cancel());
        assert_eq!(call.state(), CallState::Delivered);
        call.await.unwrap();
    }
}
