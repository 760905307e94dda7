use std::time::Duration;

use crate::audio::asset::SoundAsset;

/// Soft click used for navigation buttons and context menu items.
pub static CLICK_SOFT: SoundAsset = SoundAsset::from_static(
    "click-soft",
    "data:audio/wav;base64,UklGRnoKAABXQVZFZm10IBAAAAABAAEAIlYAAESsAAACABAAZGF0YVYKAAAAALwCfwmWEIkT9w4ZAnnvcdwF1a3YYuaM+vEPFCGZKWInFxv1B/DycOHq177YoeOz9UIKBxx3JvUmdh19DHX4heZC24LZpOF98ewE8RbvIt8lFB9gEJj9levz3uTaYeDu7QAA7BEcHzYk/R+aE0sCifDj4s/czt8H64n7DQ0VGw4iPiAuFoMGT/X65i7f3N/G6JH3ZgjyFn4f5R8eGDkK0/kj6+vhfOAl5x70CATJEpocAh9yGWgNCP5I7/HknuEd5jXxAACtDngZph0xGg0Q4AFX8yroMOOk5dTuWPyvCiwW4htmGikSVQU/94TrIeWw5fzsGPngBskSyBkdGr8TXwjy+uvuX+cz5qbrRvZNA2EPaxdjGdUU+gpj/lDy2Okg587q4/MAAAQM2hRGGHEVJA2JAaP1fOxq6Gvq8fEC/b8IJxLUFp0V3g5dBNX4Ou8A6nXqbvBZ+qEFYQ8cFWEVKxDaBtz7BPLW6+DqV+8J+LQClwwsE8kUDhH8CK7+y/Td7aPrpu4V9gAA1gkSEd8TjhHCCkIBhPcG8LDsVe5+9I39KQfdDrASshEsDJMDIvpF8v3tXe5B81/7nASXDEgRgRE8DZwFnfyN9H7vte5c8nv5NgJPCrIPBBH3DVsH6/7T9ibxVO/L8eL3AAANCPoNRRBfDs8IBwEO+evyMPCJ8ZT2//3dBSsMTQ99DvcJ7QIy+8L0QfGP8ZD1NvzGA08KJg5VDtYKmAQ6/aD2fPLX8dX0qvrPAXAI2gzuDW8LBgYe/3342PNa8l70W/kAAJgGcQtSDcQLNgfXAFD6SvUO8yj0Sfhc/s0E9gmHDNwLKQhlAhH8zPbu8y30dffm/BcDcQiVC7sL3wjDA7v9VPjv9Gj02/ah+3sB6QaFCmgLXAnuBEf/2vkM9tP0evaP+gAAZgVeCegKognnBbAAWPs792f1Tvav+aj+7gMoCEIKtgmuBvYByPx3+B72UvYB+Xb9hwLpBnwJmwlDBxQDJP64+fH2gvaE+Gz8NgGoBZ0IVgmqBwkEaP/3+tr32vY0+Iz7AABrBKsH7gjjB9UEkAAw/NL4U/cQ+NT65/44A60GZgjzB3gFmwFd/dX56fcT+Eb67P0SAqgFxAfdB/IFhQJ6/tv6lfg7+N/5Ev3+AKEEDQelB0YGTgOE/+H7VPmC+J75WvwAAJ4DRwZPB3UG9QN2AOH8IPrm+ID5xPsa/6ICdwXgBoIGegRQAdj98/pg+YP5UPtN/rIBogRbBnAG3gQQAsH+yvvu+aT5/Pqa/dAAygPGBUIGIwW0Apv/oPyK+t75xvoE/QAA9gIkBfwFSQU9A2EAcv0w+y/6rvqJ/ET/KAJ6BKEFVAWqAxMBPP7e+5T6sPop/Jz+YwHLAzQFRQX8A7AB+/6O/Af7y/rl+wr+qgAaA7oEIAU0BDcCrf89/Yf7+/q5+479AABtAjUE5gRUBKcCTwDp/RD8Pful+yr9Zv/EAaoDmwRdBAAD4QCO/p78j/un+9z83P4jARsDQwRRBEMDYgEq/y797vu9+6P8Zf6LAIoC3gMyBHED0AG8/739V/zk+4D8AP4AAPwBcgMDBIsDLAJBAEr+x/wa/G/8rv2C/3IBAAPGA5IDdQK4ANH+O/1e/HH8bv0R/+4AigJ9A4gDrAIiAVH/sf2r/IP8P/2v/nIAFAIrA28D0QJ8Acn/Jv4B/aP8Iv1d/gAAoAHSAkkD5gLHATUAmf5c/c/8Ff0Z/pn/LwF0AhYD7AIDApcACP+7/Qb9Fv3l/T3/wwAUAtsC5AIwAu0Acf8c/kb9Jf2//e3+XQC0AZgC0AJOAjcB0/98/oz9P/2n/an+AABUAU8CsAJgAnQBKwDa/tf9Y/2c/XL+rP/4AAIChwJlAqUBewA1/yX+kP2d/Uf+YP+fALQBVgJeAsoBwgCL/3T+xP2p/Sj+H/9MAGUBHwJNAuMB/gDb/8P+/v2//RT+5/4AABcB5AEzAvIBMQEjABD/O/7d/Qv+uv67/8sApQESAvUBWQFlAFr/e/4C/gz+l/59/4IAZQHqAfABdwGfAKD/vP4s/hb+fv5I/z4AJAG9AeIBjAHQAOL//P5b/ij+bf4a/wAA5ACMAc0BlwH5AB0AO/+N/kD+Zv71/sj/pgBZAbIBmgEaAVMAeP/C/l7+Z/7Y/pX/awAkAZEBlgEzAYIAsv/3/oH+b/7E/mn/MwDvAGwBiwFEAaoA5/8r/6j+ff63/kT/AAC7AEQBeQFNAcwAFwBf/9H+kf6x/ib/0v+IABoBYwFQAecAQwCR//v+qv6x/g7/qP9XAO8ASAFMAfsAagDA/yf/x/64/v3+hP8qAMQAKgFDAQkBiwDs/1L/5v7D/vL+Zv8AAJkACQE1AREBpwATAHz/CP/U/u3+Tf/a/28A5wAiARMBvQA3AKX/K//o/u7+Ov+4/0cAxAANARABzgBXAMz/Tv///vP+LP+b/yIAoAD0AAgB2QByAPD/cv8Z//3+I/+C/wAAfQDZAP0A3wCJABAAlP81/wr/H/9u/+H/WwC9AO4A4QCbAC0Atv9R/xv/IP9e/8X/OgCgANwA3wCoAEcA1f9v/y7/JP9T/63/HACDAMgA2ACxAF0A8/+M/0P/LP9L/5n/AABmALIAzwC3AHAADQCo/1r/N/9I/4j/5/9KAJsAwwC4AH8AJQDD/3H/Rf9I/3v/0P8wAIMAtAC2AIoAOgDd/4n/VP9M/3L/vP8XAGsAowCxAJEATAD1/6H/Zv9S/2z/rP8AAFQAkQCpAJYAWwAKALj/eP9b/2r/nv/s/z0AfgCfAJcAaAAeAM7/i/9n/2r/lP/Z/ycAawCTAJUAcQAvAOT/n/9z/23/jP/J/xIAWACGAJEAdwA+APf/sv+C/3L/h/+7/wAARAB3AIsAegBLAAgAxf+R/3n/hf+w/+//MgBnAIIAewBVABkA1/+g/4P/hf+n/+D/IABYAHgAegBcACcA6f+w/43/iP+h/9P/DwBIAG0AdwBhADMA+f/A/5n/jP+d/8j/AAA4AGEAcQBkAD0ABwDQ/6X/kv+b/7//8v8pAFUAawBlAEUAFADf/7L/mf+b/7f/5v8aAEgAYgBkAEsAIADt/7//ov+d/7L/2/8MADsAWQBhAE8AKgD6/8z/q/+h/6//0v8AAC4AUABdAFIAMgAFANn/tv+m/67/y//1/yEARQBXAFIAOQAQAOX/wP+s/67/xf/r/xUAOwBRAFIAPgAaAPH/y/+z/6//wf/i/woAMABJAE8AQQAiAPv/1f+7/7L/vv/a/wAAJQBBAEwAQwApAAQA4P/D/7b/vf/U//f/GwA5AEcAQwAuAA0A6v/M/7v/vf/Q/+//EQAwAEIAQwAyABUA8//V/8H/vv/M/+f/CAAnADwAQQA1ABwA/P/d/8f/wP/K/+H/AAAeADUAPgA3ACEAAwDm/87/xP/J/9z/+f8WAC4AOgA3ACYACwDu/9X/yP/J/9j/8v8OACcANgA3ACkAEQD2/93/zf/K/9b/7P8GACAAMQA1ACsAFwD9/+T/0v/M/9T/5/8=",
    Some(Duration::from_millis(60)),
);
