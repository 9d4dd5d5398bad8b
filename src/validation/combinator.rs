/// 可累积错误的合并操作
pub trait Semigroup {
    fn combine(self, other: Self) -> Self;
}

/// 验证结果：成功值或累积的错误
///
/// 与 `Result` 不同，`ap` / `zip` 在两边都失败时会合并错误，而不是只保留第一个。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<E, A> {
    Success(A),
    Failure(E),
}

impl<E, A> Validation<E, A> {
    pub fn success(value: A) -> Self {
        Validation::Success(value)
    }

    pub fn fail(error: E) -> Self {
        Validation::Failure(error)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    pub fn success_value(&self) -> Option<&A> {
        match self {
            Validation::Success(value) => Some(value),
            Validation::Failure(_) => None,
        }
    }

    pub fn fail_value(&self) -> Option<&E> {
        match self {
            Validation::Success(_) => None,
            Validation::Failure(error) => Some(error),
        }
    }

    pub fn map<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    pub fn map_err<G, F>(self, f: F) -> Validation<G, A>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }

    /// 顺序组合：失败时短路，`f` 不会被调用
    pub fn flat_map<B, F>(self, f: F) -> Validation<E, B>
    where
        F: FnOnce(A) -> Validation<E, B>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// 折叠为单一值，调用方据此分支处理
    pub fn cata<R>(self, on_failure: impl FnOnce(E) -> R, on_success: impl FnOnce(A) -> R) -> R {
        match self {
            Validation::Success(value) => on_success(value),
            Validation::Failure(error) => on_failure(error),
        }
    }

    pub fn into_result(self) -> Result<A, E> {
        self.into()
    }
}

impl<E: Semigroup, A> Validation<E, A> {
    /// Applies a validated function to this value.
    ///
    /// Both sides have already been evaluated by the time this is called.
    /// When both failed, `self`'s errors come first and `other`'s are
    /// combined into them.
    pub fn ap<B, F>(self, other: Validation<E, F>) -> Validation<E, B>
    where
        F: FnOnce(A) -> B,
    {
        match (self, other) {
            (Validation::Success(value), Validation::Success(f)) => Validation::Success(f(value)),
            (Validation::Failure(error), Validation::Success(_)) => Validation::Failure(error),
            (Validation::Success(_), Validation::Failure(error)) => Validation::Failure(error),
            (Validation::Failure(left), Validation::Failure(right)) => {
                Validation::Failure(left.combine(right))
            }
        }
    }

    pub fn zip<B>(self, other: Validation<E, B>) -> Validation<E, (A, B)> {
        self.ap(other.map(|b| move |a: A| (a, b)))
    }
}

impl<E, A> From<Validation<E, A>> for Result<A, E> {
    fn from(validation: Validation<E, A>) -> Self {
        match validation {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }
}

impl<E, A> From<Result<A, E>> for Validation<E, A> {
    fn from(result: Result<A, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }
}
